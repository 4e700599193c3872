use anyhow::Result;
use clap::Args;
use fox2ros_schema::SchemaCatalog;

#[derive(Args)]
pub struct ListArgs {}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let catalog = SchemaCatalog::builtin();

        println!("schemas:");
        for schema in catalog.schemas() {
            match &schema.ros_equivalent {
                Some(equivalent) => println!("  {} (= {equivalent})", schema.name),
                None => println!("  {}", schema.name),
            }
        }
        println!("enums:");
        for def in catalog.enums() {
            println!("  {} ({} values)", def.name, def.values.len());
        }
        Ok(())
    }
}
