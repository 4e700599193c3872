use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use fox2ros_genmsg::{RosDialect, generate_merged_schema, generate_msg};
use fox2ros_schema::SchemaCatalog;

use super::parse_dialect;

#[derive(Args)]
pub struct GenerateArgs {
    /// Output directory
    #[arg(short, long)]
    out: PathBuf,

    /// Target ROS version (1 or 2)
    #[arg(long = "ros-version", value_parser = parse_dialect, default_value = "1")]
    dialect: RosDialect,

    /// Emit merged bundles (each definition plus all its dependencies)
    #[arg(long)]
    merged: bool,
}

impl GenerateArgs {
    pub fn run(self) -> Result<()> {
        let catalog = SchemaCatalog::builtin();
        fs::create_dir_all(&self.out)
            .with_context(|| format!("failed to create {}", self.out.display()))?;

        for schema in catalog.schemas() {
            // Schemas with a ROS equivalent are published as that type
            // and get no foxglove_msgs definition of their own.
            if schema.ros_equivalent.is_some() {
                continue;
            }
            let text = if self.merged {
                generate_merged_schema(schema, &catalog, self.dialect)?
            } else {
                generate_msg(schema, &catalog, self.dialect)?
            };
            let path = self.out.join(format!("{}.msg", schema.name));
            fs::write(&path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        Ok(())
    }
}
