// libs/core/enranda/src/errors.rs
// =================================================================
// APARATO: ENRANDA ERRORS
// RESPONSABILIDAD: CATÁLOGO DE FALLOS DEL GENERADOR
// ESTADO: ELITE COMPLIANCE (FULL RUSTDOC)
// =================================================================

use thiserror::Error;

/// Define los errores posibles durante la construcción del generador.
///
/// El generador en régimen no falla: la acumulación reporta su avance
/// con un booleano de disponibilidad y la salida es infalible una vez
/// construidas las tablas.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrandaError {
    /// El invocador compiló contra una versión incompatible del
    /// generador.
    #[error("versión incompatible: se esperaba break={expected_break_count}/feature<={expected_feature_count}, se recibió break={requested_break_count}/feature={requested_feature_count}")]
    VersionMismatch {
        /// Conteo de rupturas del binario compilado.
        expected_break_count: u32,
        /// Conteo de características del binario compilado.
        expected_feature_count: u32,
        /// Conteo de rupturas que el invocador conoce.
        requested_break_count: u32,
        /// Conteo de características que el invocador exige.
        requested_feature_count: u32,
    },

    /// El sistema rechazó la reserva de las tablas internas.
    #[error("fallo de reserva de las tablas del generador ({requested_items} palabras)")]
    Allocation {
        /// Palabras de 16 bits cuya reserva falló.
        requested_items: usize,
    },
}
