pub mod cpf;
