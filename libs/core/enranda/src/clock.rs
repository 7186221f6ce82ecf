// [libs/core/enranda/src/clock.rs]
/*!
 * =================================================================
 * APARATO: CYCLE COUNTER INTERFACE (V7.0 - SILICON SEAM)
 * CLASIFICACIÓN: CORE ENRANDA (ESTRATO L1)
 * RESPONSABILIDAD: LECTURA DEL CONTADOR DE CICLOS DEL PROCESADOR
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. TRAIT SEAM: El contador de ciclos es una costura de trait, lo que
 *    habilita dobles deterministas en los bancos de certificación.
 * 2. BATCH X4: La variante por lotes entrega cuatro truncamientos de
 *    16 bits sucesivos empaquetados little-endian (el más antiguo en
 *    los bits bajos); cuatro es el óptimo empírico entre sobrecoste de
 *    lectura y tiempo en tareas de alta entropía.
 * 3. SILICON DISPATCH: x86_64 lee RDTSC directamente; el resto de
 *    arquitecturas degrada al reloj monotónico del sistema.
 *
 * # Mathematical Proof (Monotonicity):
 * RDTSC sobre un mismo núcleo y el reloj monotónico del host son no
 * decrecientes entre lecturas cercanas en el tiempo, el único contrato
 * que la acumulación de protoentropía exige.
 * =================================================================
 */

/// Fuente de un contador de 64 bits cuyos bits bajos avanzan con
/// granularidad de reloj de CPU.
pub trait CycleSource {
    /// Lee el contador. No decreciente entre llamadas cercanas sobre
    /// un mismo hilo.
    fn read(&mut self) -> u64;

    /// Lee cuatro truncamientos de 16 bits sucesivos, empaquetados
    /// little-endian con el más antiguo en los bits [15:0].
    fn read_x4(&mut self) -> u64 {
        let mut packed = 0u64;
        for lane in 0..4 {
            packed |= (self.read() & 0xFFFF) << (lane * 16);
        }
        packed
    }
}

/// Lector de ciclos del silicio anfitrión.
#[derive(Debug, Clone, Copy, Default)]
pub struct TscCycleSource;

#[cfg(target_arch = "x86_64")]
impl CycleSource for TscCycleSource {
    #[inline]
    fn read(&mut self) -> u64 {
        // RDTSC está presente en todo x86_64; la lectura carece de
        // efectos sobre memoria.
        unsafe { core::arch::x86_64::_rdtsc() }
    }
}

#[cfg(not(target_arch = "x86_64"))]
impl CycleSource for TscCycleSource {
    #[inline]
    fn read(&mut self) -> u64 {
        use std::sync::OnceLock;
        use std::time::Instant;
        static PROCESS_EPOCH: OnceLock<Instant> = OnceLock::new();
        let epoch = PROCESS_EPOCH.get_or_init(Instant::now);
        epoch.elapsed().as_nanos() as u64
    }
}
