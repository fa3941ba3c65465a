use thiserror::Error;

/// Reasons a submission is rejected. All are recoverable by editing the form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("Por favor selecciona un color de caja")]
    MissingBoxColor,
    #[error("Por favor completa todos los datos de contacto")]
    IncompleteContact,
    #[error("El mensaje no puede superar los {max} caracteres")]
    MessageTooLong { len: usize, max: usize },
}
