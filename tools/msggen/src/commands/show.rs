use anyhow::{Result, bail};
use clap::Args;
use fox2ros_genmsg::{RosDialect, generate_merged_schema, generate_msg};
use fox2ros_schema::SchemaCatalog;

use super::parse_dialect;

#[derive(Args)]
pub struct ShowArgs {
    /// Schema name, e.g. `PoseInFrame`
    schema: String,

    /// Target ROS version (1 or 2)
    #[arg(long = "ros-version", value_parser = parse_dialect, default_value = "1")]
    dialect: RosDialect,

    /// Print the merged bundle instead of the single definition
    #[arg(long)]
    merged: bool,
}

impl ShowArgs {
    pub fn run(self) -> Result<()> {
        let catalog = SchemaCatalog::builtin();
        let Some(schema) = catalog.schema(&self.schema) else {
            bail!("unknown schema '{}'", self.schema);
        };

        let text = if self.merged {
            generate_merged_schema(schema, &catalog, self.dialect)?
        } else {
            generate_msg(schema, &catalog, self.dialect)?
        };
        print!("{text}");
        Ok(())
    }
}
