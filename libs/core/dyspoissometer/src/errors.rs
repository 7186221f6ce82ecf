// libs/core/dyspoissometer/src/errors.rs
// =================================================================
// APARATO: DYSPOISSOMETER ERRORS
// RESPONSABILIDAD: CATÁLOGO DE FALLOS DEL MOTOR DYSPOISSOMÉTRICO
// ESTADO: ELITE COMPLIANCE (FULL RUSTDOC)
// =================================================================

use thiserror::Error;

/// Define los errores posibles durante la operación del motor.
///
/// Este enum reemplaza los centinelas flotantes negativos de las
/// interfaces clásicas por retornos portadores de resultado; los
/// binarios de línea de comandos traducen cualquier variante a código
/// de salida 1.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DyspoissonError {
    /// El invocador compiló contra una versión incompatible del motor.
    ///
    /// Ocurre si el conteo de rupturas no coincide exactamente, o si el
    /// conteo de características solicitado supera el del binario.
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

    /// El sistema rechazó la reserva de memoria de trabajo.
    #[error("fallo de reserva de memoria para {requested_items} elementos")]
    Allocation {
        /// Número de elementos cuya reserva falló.
        requested_items: usize,
    },

    /// Un tamaño derivado excede el espacio de direcciones del host
    /// aunque Uint lo permitiera representar.
    #[error("el tamaño derivado de {requested_items} elementos excede el espacio de direcciones")]
    Overflow {
        /// Número de elementos que provocó el desborde.
        requested_items: u128,
    },

    /// El resultado está genuinamente mal definido para la entrada.
    #[error("entrada numéricamente degenerada: {detail}")]
    NumericDegenerate {
        /// Descripción corta de la degeneración detectada.
        detail: &'static str,
    },
}
