// [libs/core/numeric/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: NUMERIC KERNEL MASTER HUB (V9.0 - PRECISION SOVEREIGN)
 * CLASIFICACIÓN: CORE NUMERIC (ESTRATO L1)
 * RESPONSABILIDAD: PRECISIÓN CONMUTABLE Y OSCILACIÓN PSEUDOALEATORIA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. PRECISION SOVEREIGNTY: Selección en tiempo de compilación del par
 *    (Number, Uint) que parametriza todos los estratos superiores.
 * 2. LOG-GAMMA AUTHORITY: 'log_sum' se evalúa exclusivamente vía
 *    ln-gamma; jamás por acumulación de logaritmos individuales.
 * 3. DETERMINISTIC OSCILLATION: El oscilador Marsaglia MWC de 64 bits
 *    garantiza flujos reproducibles entre los motores de búsqueda.
 * 4. HYGIENE: Cero advertencias de compilación y rustdoc completo.
 *
 * # Mathematical Proof (Separation of Strata):
 * Este aparato no posee estado global; toda función es pura o actúa
 * sobre una celda de semilla poseída por el invocador, lo que habilita
 * la paralelización trivial de los estratos L2.
 * =================================================================
 */

/// Selección de precisión y primitivas trascendentes (exp, log, lnΓ).
pub mod precision;

/// Oscilador multiply-with-carry de Marsaglia (64 bits de estado).
pub mod marsaglia;

/**
 * PRELUDIO NUMÉRICO SOBERANO
 *
 * Única autoridad de importación autorizada para los estratos
 * superiores (L2-Dyspoissometer y aplicaciones).
 */
pub mod prelude {
    pub use crate::marsaglia::{MarsagliaOscillator, MARSAGLIA_A};
    pub use crate::precision::{
        exp, log, log_np1, log_sum, log_sum_np1, round, sqrt, Number, Uint, UINT_BITS, UINT_BIT_MAX,
        UINT_MAX, UINT_SIZE,
    };
}
