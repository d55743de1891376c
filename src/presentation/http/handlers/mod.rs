pub mod cpf;
pub mod docs;
pub mod health;
