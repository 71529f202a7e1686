pub use sea_orm_migration::prelude::*;

mod m20250610_101500_create_home_pages_table;
mod m20250610_101530_create_about_pages_table;
mod m20250610_101600_create_contact_details_table;
mod m20250610_101630_create_site_settings_table;
mod m20250610_101700_create_projects_table;
mod m20250610_101730_create_skill_categories_table;
mod m20250610_101800_create_profiles_table;
mod m20250610_101830_create_certificates_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250610_101500_create_home_pages_table::Migration),
            Box::new(m20250610_101530_create_about_pages_table::Migration),
            Box::new(m20250610_101600_create_contact_details_table::Migration),
            Box::new(m20250610_101630_create_site_settings_table::Migration),
            Box::new(m20250610_101700_create_projects_table::Migration),
            Box::new(m20250610_101730_create_skill_categories_table::Migration),
            Box::new(m20250610_101800_create_profiles_table::Migration),
            Box::new(m20250610_101830_create_certificates_table::Migration),
        ]
    }
}
