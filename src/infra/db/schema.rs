//! Table definitions created at startup.

use sea_orm_migration::prelude::*;

/// `CREATE TABLE IF NOT EXISTS medico (...)`
pub fn create_doctors_table() -> TableCreateStatement {
    Table::create()
        .table(Doctors::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Doctors::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Doctors::Name).string().not_null())
        .col(ColumnDef::new(Doctors::Specialty).string().not_null())
        .to_owned()
}

#[derive(Iden)]
enum Doctors {
    #[iden = "medico"]
    Table,
    Id,
    #[iden = "nome"]
    Name,
    #[iden = "especialidade"]
    Specialty,
}
