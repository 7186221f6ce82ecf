// [libs/core/dyspoissometer/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: DYSPOISSOMETER MASTER HUB (V12.0 - METRIC SOVEREIGN)
 * CLASIFICACIÓN: CORE DYSPOISSOMETER (ESTRATO L2)
 * RESPONSABILIDAD: ORQUESTACIÓN DE MÉTRICAS DE CALIDAD ALEATORIA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. METRIC REGISTRATION: Inyecta los módulos de ordenación, listas,
 *    logfreedom, kernel, MIBR, estadísticos y búsqueda Monte Carlo.
 * 2. VERSION GATE: La compuerta init() sella la compatibilidad de
 *    conteos de ruptura y característica en tiempo de ejecución.
 * 3. PURE ENTRY POINTS: Ningún estado mutable compartido; todos los
 *    puntos de entrada operan sobre búferes del invocador.
 * 4. HYGIENE: Cero advertencias de compilación y rustdoc completo.
 *
 * # Mathematical Proof (Composability):
 * Cada métrica es una función pura de sus listas de entrada; la
 * paralelización por instancias es trivialmente correcta.
 * =================================================================
 */

/// Catálogo de fallos semánticos del motor.
pub mod errors;

/// Ordenaciones radix LSD de doble búfer (Uint, Number, índices).
pub mod sort;

/// Primitivas de listas de frecuencia y población, con autoescala.
pub mod lists;

/// Logfreedom densa/dispersa, dyspoissonismo, sparsity y Poisson.
pub mod logfreedom;

/// Familia de kernel: tamaño, densidad, esperanzas y sesgo.
pub mod kernel;

/// Familia MIBR: estadístico, esperanza y conversiones de sesgo.
pub mod mibr;

/// Estadísticos de listas de máscaras tipadas (u8/u16/u24/u32).
pub mod stats;

/// Búsquedas Monte Carlo: máxima logfreedom, mediana y generación.
pub mod search;

/// Conteo de cambios retroincompatibles acumulados por este motor.
pub const BUILD_BREAK_COUNT: u32 = 0;

/// Conteo de características acumuladas por este motor.
pub const BUILD_FEATURE_COUNT: u32 = 1;

use crate::errors::DyspoissonError;

/**
 * Compuerta de versión del motor.
 *
 * # Errors:
 * 'VersionMismatch' si el invocador desconoce alguna ruptura crítica
 * (conteo de rupturas distinto) o exige características que este
 * binario aún no posee (conteo de características mayor).
 */
pub fn init(break_count: u32, feature_count: u32) -> Result<(), DyspoissonError> {
    if break_count != BUILD_BREAK_COUNT || BUILD_FEATURE_COUNT < feature_count {
        return Err(DyspoissonError::VersionMismatch {
            expected_break_count: BUILD_BREAK_COUNT,
            expected_feature_count: BUILD_FEATURE_COUNT,
            requested_break_count: break_count,
            requested_feature_count: feature_count,
        });
    }
    Ok(())
}

/**
 * PRELUDIO DYSPOISSOMÉTRICO SOBERANO
 *
 * Única autoridad de importación para los estratos de aplicación.
 */
pub mod prelude {
    pub use crate::errors::DyspoissonError;
    pub use crate::kernel::{
        kernel_density, kernel_density_expected_fast, kernel_density_expected_slow, kernel_size,
        kernel_skew,
    };
    pub use crate::lists::{
        freq_list_accrue_autoscale, freq_list_fill, freq_max, pop_list_fill, pop_list_new,
        pop_list_obtuse_new, uint_list_new_zeroed,
    };
    pub use crate::logfreedom::{
        dyspoissonism, logfreedom_dense, logfreedom_sparse, poisson_term, sparsity,
    };
    pub use crate::mibr::{mibr, mibr_expected, mibr_from_skew, skew_from_mibr};
    pub use crate::search::{
        logfreedom_max, logfreedom_max_parallel, logfreedom_median, mask_list_pseudorandom_fill,
    };
    pub use crate::sort::{number_list_sort, uint_idx_list_sort, uint_list_sort};
    pub use crate::stats::{
        mask_list_logfreedom, mask_list_mean, mask_list_stats, u16_list_logfreedom,
        u24_list_logfreedom, u32_list_logfreedom, u8_list_logfreedom, MaskListStats, MaskListView,
    };
    pub use crate::{init, BUILD_BREAK_COUNT, BUILD_FEATURE_COUNT};
}
