// [libs/core/enranda/src/lib.rs]
#![deny(missing_docs)]
// Se autoriza 'unsafe' exclusivamente para la lectura RDTSC del
// estrato de silicio.
#![allow(unsafe_code)]

/*!
 * =================================================================
 * APARATO: ENRANDA MASTER HUB (V7.0 - PROTOENTROPY SOVEREIGN)
 * CLASIFICACIÓN: CORE ENRANDA (ESTRATO L2)
 * RESPONSABILIDAD: ORQUESTACIÓN DEL GENERADOR VERDADERO-ALEATORIO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SEAM REGISTRATION: Inyecta la costura de contador de ciclos y el
 *    núcleo del autómata Accrue/Trapdoor.
 * 2. INSTANCE SOVEREIGNTY: Cero estado global; cada instancia posee su
 *    fuente de ciclos y sus tres tablas de 2^16 palabras.
 * 3. HYGIENE: Cero advertencias de compilación y rustdoc completo.
 *
 * # Mathematical Proof (Batch Yield):
 * Cada transición Accrue -> Trapdoor rinde exactamente 2^16 bytes de
 * entropía (2^15 sumas u16 de las mitades de la permutación) antes de
 * exigir una nueva acumulación.
 * =================================================================
 */

/// Costura del contador de ciclos y lector del silicio anfitrión.
pub mod clock;

/// Catálogo de fallos del generador.
pub mod errors;

/// Autómata de acumulación y salida trapdoor.
pub mod generator;

/**
 * PRELUDIO ENRANDA SOBERANO
 *
 * Única autoridad de importación para los estratos de aplicación.
 */
pub mod prelude {
    pub use crate::clock::{CycleSource, TscCycleSource};
    pub use crate::errors::EnrandaError;
    pub use crate::generator::{
        Enranda, Phase, BUILD_BREAK_COUNT, BUILD_FEATURE_COUNT, ENTROPY_SIZE, ENTROPY_SIZE_LOG2,
        ENTROPY_U16_COUNT, ENTROPY_U32_COUNT, ENTROPY_U64_COUNT,
    };
}
