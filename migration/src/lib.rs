pub use sea_orm_migration::prelude::*;

mod m20251017_000001_create_user_table;
mod m20251017_000002_create_pokemon_table;
mod m20251017_000003_create_pokeball_table;
mod m20251017_000004_create_favorite_pokemon_table;
mod m20251017_000005_create_favorite_pokeball_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_create_user_table::Migration),
            Box::new(m20251017_000002_create_pokemon_table::Migration),
            Box::new(m20251017_000003_create_pokeball_table::Migration),
            Box::new(m20251017_000004_create_favorite_pokemon_table::Migration),
            Box::new(m20251017_000005_create_favorite_pokeball_table::Migration),
        ]
    }
}
