// [libs/core/enranda/src/generator.rs]
/*!
 * =================================================================
 * APARATO: ENRANDA GENERATOR CORE (V7.0 - TRAPDOOR SOVEREIGN)
 * CLASIFICACIÓN: CORE ENRANDA (ESTRATO L2)
 * RESPONSABILIDAD: ACUMULACIÓN DE PROTOENTROPÍA Y SALIDA TRAPDOOR
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. CORKSCREW DUAL: Dos hashes sacacorchos con rotaciones impares
 *    distintas (3 y 1) evitan la resonancia entre la secuencia de
 *    timedeltas y su historia de novedades.
 * 2. NOVELTY GATE: Solo una secuencia de timedeltas inédita en las
 *    últimas 2^16 observaciones acredita 16 bits de protoentropía y
 *    dispara un intercambio permutativo tipo Fisher-Yates.
 * 3. TRAPDOOR SUM: La suma modular de las dos mitades de la
 *    permutación destruye la dependencia permutativa preservando la
 *    continuidad de acarreo por al menos 16 bits; ni la resta ni el
 *    XOR alcanzan la distribución de ceros de un flujo genuino.
 *
 * # Mathematical Proof (Protoentropy):
 * Cada novedad selecciona uniformemente una transposición de la
 * permutación de 2^16 elementos; tras 2^16 transposiciones la
 * permutación recorre una de (2^16)! configuraciones, cuyo logaritmo
 * acota la entropía extraíble por lote en 2^16 bytes.
 * =================================================================
 */

use crate::clock::{CycleSource, TscCycleSource};
use crate::errors::EnrandaError;

/// Log2 del tamaño en bytes de un lote de entropía.
pub const ENTROPY_SIZE_LOG2: u32 = 16;

/// Bytes de entropía por transición completa a Trapdoor.
pub const ENTROPY_SIZE: usize = 1 << ENTROPY_SIZE_LOG2;

/// Palabras u16 de entropía por lote.
pub const ENTROPY_U16_COUNT: usize = ENTROPY_SIZE >> 1;

/// Palabras u32 de entropía por lote.
pub const ENTROPY_U32_COUNT: usize = ENTROPY_SIZE >> 2;

/// Palabras u64 de entropía por lote.
pub const ENTROPY_U64_COUNT: usize = ENTROPY_SIZE >> 3;

/// Conteo de cambios retroincompatibles acumulados por el generador.
pub const BUILD_BREAK_COUNT: u32 = 0;

/// Conteo de características acumuladas por el generador.
pub const BUILD_FEATURE_COUNT: u32 = 1;

const U16_SPAN: usize = 1 << 16;
const U16_SPAN_HALF: usize = U16_SPAN >> 1;

/// Fase del autómata del generador.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Acumulando protoentropía de temporización.
    Accrue,
    /// Permutación completa; emitiendo entropía por trapdoor.
    Trapdoor,
}

/**
 * Generador verdadero-aleatorio por jitter de temporización.
 *
 * Una instancia no es compartible entre hilos; el patrón paralelo
 * esperado es una instancia por worker, cada una con su fuente de
 * ciclos. El estado interno es protoentropía: difusamente entrópica y
 * por definición insegura de emitir directamente; los accesores de
 * auditoría existen para certificar invariantes, jamás como salida.
 */
#[derive(Debug)]
pub struct Enranda<C: CycleSource = TscCycleSource> {
    cycle_source: C,
    sequence_hash_count_list: Box<[u16]>,
    sequence_hash_list: Box<[u16]>,
    unique_list: Box<[u16]>,
    history_hash: u16,
    sequence_hash: u16,
    sequence_hash_idx: u16,
    time: u16,
    unique_idx: u16,
    phase: Phase,
}

fn u16_table() -> Result<Box<[u16]>, EnrandaError> {
    let mut table = Vec::new();
    table
        .try_reserve_exact(U16_SPAN)
        .map_err(|_| EnrandaError::Allocation {
            requested_items: U16_SPAN,
        })?;
    table.resize(U16_SPAN, 0);
    Ok(table.into_boxed_slice())
}

impl Enranda<TscCycleSource> {
    /**
     * Construye un generador sobre el contador de ciclos del silicio
     * anfitrión, previa verificación de versión.
     *
     * # Errors:
     * 'VersionMismatch' si los conteos de compilación no satisfacen el
     * contrato; 'Allocation' si las tablas no caben en memoria.
     */
    pub fn init(break_count: u32, feature_count: u32) -> Result<Self, EnrandaError> {
        Self::with_source(TscCycleSource, break_count, feature_count)
    }
}

impl<C: CycleSource> Enranda<C> {
    /**
     * Construye un generador sobre una fuente de ciclos arbitraria
     * (incluidos dobles deterministas de certificación).
     */
    pub fn with_source(
        cycle_source: C,
        break_count: u32,
        feature_count: u32,
    ) -> Result<Self, EnrandaError> {
        if break_count != BUILD_BREAK_COUNT || BUILD_FEATURE_COUNT < feature_count {
            return Err(EnrandaError::VersionMismatch {
                expected_break_count: BUILD_BREAK_COUNT,
                expected_feature_count: BUILD_FEATURE_COUNT,
                requested_break_count: break_count,
                requested_feature_count: feature_count,
            });
        }
        let mut generator = Self {
            cycle_source,
            sequence_hash_count_list: u16_table()?,
            sequence_hash_list: u16_table()?,
            unique_list: u16_table()?,
            history_hash: 0,
            sequence_hash: 0,
            sequence_hash_idx: 0,
            time: 0,
            unique_idx: 0,
            phase: Phase::Accrue,
        };
        generator.rewind();
        tracing::debug!(
            table_words = U16_SPAN * 3,
            "🎰 [ENRANDA]: Generador rebobinado y listo para acumular."
        );
        Ok(generator)
    }

    /**
     * Reinicia el generador a su estado post-construcción.
     *
     * Cada hash de secuencia posible se asume visto una vez (población
     * uno y anillo identidad): una guardia contra confundir una
     * secuencia popular y predecible con un evento novedoso. 'time'
     * queda en cero en lugar del contador real: evita una llamada al
     * host durante una operación convencionalmente limitada a memoria
     * y maximiza la entropía del primer delta.
     */
    pub fn rewind(&mut self) {
        for idx in 0..U16_SPAN {
            self.sequence_hash_count_list[idx] = 1;
            self.sequence_hash_list[idx] = idx as u16;
            self.unique_list[idx] = idx as u16;
        }
        self.history_hash = 0;
        self.sequence_hash = 0;
        self.sequence_hash_idx = 0;
        self.time = 0;
        self.unique_idx = 0;
        self.phase = Phase::Accrue;
    }

    /**
     * Acumula protoentropía de temporización.
     *
     * # In:
     * Con 'fill' falso realiza un único paso de lectura y retorna con
     * latencia mínima; con 'fill' verdadero itera hasta completar la
     * permutación (modo en el que la lectura por lotes x4 entra en
     * juego).
     *
     * # Out:
     * true si la protoentropía está lista para el trapdoor (garantizado
     * bajo 'fill'); false si aún falta acumulación. Invocar en fase
     * Trapdoor es una no-operación que retorna true.
     */
    pub fn accrue(&mut self, fill: bool) -> bool {
        if self.phase != Phase::Accrue {
            return true;
        }
        let mut fill = fill;
        let mut ready = false;
        let mut history_hash = self.history_hash;
        let mut sequence_hash = self.sequence_hash;
        let mut sequence_hash_idx = self.sequence_hash_idx;
        let mut time = self.time;
        let mut unique_idx = self.unique_idx;
        let mut timestamp_count = 0u8;
        let mut timestamp_x4 = 0u64;
        loop {
            let time_previous = time;
            if fill {
                if timestamp_count == 0 {
                    timestamp_x4 = self.cycle_source.read_x4();
                    timestamp_count = 4;
                }
                time = timestamp_x4 as u16;
                timestamp_x4 >>= 16;
                timestamp_count -= 1;
            } else {
                time = self.cycle_source.read() as u16;
            }
            // Los 16 bits bajos del delta bastan: un delta sistemático
            // de 2^16 o más implicaría un host tan ocioso que la
            // urgencia de entropía es nula.
            let timedelta = time.wrapping_sub(time_previous);
            sequence_hash = sequence_hash.rotate_right(3).wrapping_add(timedelta);
            let sequence_hash_count =
                self.sequence_hash_count_list[sequence_hash as usize].wrapping_add(1);
            // Si el contador envolviera, las estadísticas quedarían
            // deformadas: se descarta la muestra conservando el hash.
            // (Un host quiescente y serializado puede producir 2^16
            // timedeltas idénticos seguidos.)
            if sequence_hash_count != 0 {
                let sequence_hash_old = self.sequence_hash_list[sequence_hash_idx as usize];
                self.sequence_hash_count_list[sequence_hash as usize] = sequence_hash_count;
                self.sequence_hash_count_list[sequence_hash_old as usize] -= 1;
                self.sequence_hash_list[sequence_hash_idx as usize] = sequence_hash;
                sequence_hash_idx = sequence_hash_idx.wrapping_add(1);
                if sequence_hash_count == 1 {
                    // Secuencia inédita en las últimas 2^16: acredita
                    // al menos 16 bits y registra información
                    // permutativa intercambiando dos posiciones únicas.
                    let unique0 = self.unique_list[unique_idx as usize];
                    history_hash = history_hash.rotate_right(1).wrapping_add(sequence_hash);
                    let unique1 = self.unique_list[history_hash as usize];
                    sequence_hash = 0;
                    self.unique_list[history_hash as usize] = unique0;
                    self.unique_list[unique_idx as usize] = unique1;
                    unique_idx = unique_idx.wrapping_add(1);
                    if unique_idx == 0 {
                        // Permutación completa: una de (2^16)!
                        // configuraciones. Hora de trapdoorear.
                        fill = false;
                        ready = true;
                        self.phase = Phase::Trapdoor;
                    }
                }
            }
            if !fill {
                break;
            }
        }
        self.unique_idx = unique_idx;
        self.time = time;
        self.sequence_hash_idx = sequence_hash_idx;
        self.sequence_hash = sequence_hash;
        self.history_hash = history_hash;
        ready
    }

    fn ensure_trapdoor(&mut self) {
        if self.phase == Phase::Accrue {
            self.accrue(true);
        }
    }

    fn conclude_batch(&mut self, output_idx: usize) {
        if output_idx == U16_SPAN_HALF {
            // Protoentropía agotada: revertir a acumulación, que
            // rellenará la permutación completa en la próxima demanda.
            self.phase = Phase::Accrue;
            self.unique_idx = 0;
        } else {
            self.unique_idx = output_idx as u16;
        }
    }

    /**
     * Rellena una lista de palabras u16 con entropía.
     *
     * Cada palabra es la suma modular de dos posiciones únicas, una de
     * cada mitad de la permutación; la continuidad de acarreo se
     * mantiene dentro de cada palabra.
     */
    pub fn fill_u16(&mut self, entropy_list: &mut [u16]) {
        let mut entropy_idx = 0usize;
        while entropy_idx < entropy_list.len() {
            self.ensure_trapdoor();
            let mut output_idx = self.unique_idx as usize;
            let batch = (U16_SPAN_HALF - output_idx).min(entropy_list.len() - entropy_idx);
            for _ in 0..batch {
                let unique0 = self.unique_list[output_idx];
                let unique1 = self.unique_list[output_idx + U16_SPAN_HALF];
                entropy_list[entropy_idx] = unique0.wrapping_add(unique1);
                entropy_idx += 1;
                output_idx += 1;
            }
            self.conclude_batch(output_idx);
        }
    }

    /**
     * Rellena una lista de palabras u32 con entropía.
     *
     * Cada mitad aporta la concatenación little-endian de dos u16
     * consecutivos; la suma corre a lo ancho completo, propagando el
     * acarreo a través de los 32 bits.
     */
    pub fn fill_u32(&mut self, entropy_list: &mut [u32]) {
        let mut entropy_idx = 0usize;
        while entropy_idx < entropy_list.len() {
            self.ensure_trapdoor();
            let mut output_idx = self.unique_idx as usize;
            let available = (U16_SPAN_HALF - output_idx) >> 1;
            if available == 0 {
                // Queda un único u16: forzar la reacumulación.
                self.conclude_batch(U16_SPAN_HALF);
                continue;
            }
            let batch = available.min(entropy_list.len() - entropy_idx);
            for _ in 0..batch {
                let unique0 = u32::from(self.unique_list[output_idx])
                    | (u32::from(self.unique_list[output_idx + 1]) << 16);
                let unique1 = u32::from(self.unique_list[output_idx + U16_SPAN_HALF])
                    | (u32::from(self.unique_list[output_idx + U16_SPAN_HALF + 1]) << 16);
                entropy_list[entropy_idx] = unique0.wrapping_add(unique1);
                entropy_idx += 1;
                output_idx += 2;
            }
            self.conclude_batch(output_idx);
        }
    }

    /**
     * Rellena una lista de palabras u64 con entropía, con acarreo
     * propagado a lo ancho de los 64 bits.
     */
    pub fn fill_u64(&mut self, entropy_list: &mut [u64]) {
        let mut entropy_idx = 0usize;
        while entropy_idx < entropy_list.len() {
            self.ensure_trapdoor();
            let mut output_idx = self.unique_idx as usize;
            let available = (U16_SPAN_HALF - output_idx) >> 2;
            if available == 0 {
                self.conclude_batch(U16_SPAN_HALF);
                continue;
            }
            let batch = available.min(entropy_list.len() - entropy_idx);
            for _ in 0..batch {
                let unique0 = u64::from(self.unique_list[output_idx])
                    | (u64::from(self.unique_list[output_idx + 1]) << 16)
                    | (u64::from(self.unique_list[output_idx + 2]) << 32)
                    | (u64::from(self.unique_list[output_idx + 3]) << 48);
                let unique1 = u64::from(self.unique_list[output_idx + U16_SPAN_HALF])
                    | (u64::from(self.unique_list[output_idx + U16_SPAN_HALF + 1]) << 16)
                    | (u64::from(self.unique_list[output_idx + U16_SPAN_HALF + 2]) << 32)
                    | (u64::from(self.unique_list[output_idx + U16_SPAN_HALF + 3]) << 48);
                entropy_list[entropy_idx] = unique0.wrapping_add(unique1);
                entropy_idx += 1;
                output_idx += 4;
            }
            self.conclude_batch(output_idx);
        }
    }

    /**
     * Rellena una lista de bytes con entropía.
     *
     * Un conteo impar consume un trapdoor u16 completo para el byte
     * sobrante (el byte alto se descarta): la discontinuidad de
     * acarreo jamás ocurre con período menor a 16 bits.
     */
    pub fn fill_bytes(&mut self, entropy_list: &mut [u8]) {
        let mut entropy_idx = 0usize;
        while entropy_idx < entropy_list.len() {
            self.ensure_trapdoor();
            let mut output_idx = self.unique_idx as usize;
            let available_bytes = (U16_SPAN_HALF - output_idx) << 1;
            let requested = entropy_list.len() - entropy_idx;
            let mut batch = available_bytes.min(requested);
            if requested < available_bytes && (requested & 1) == 1 {
                let trapdoor = self.unique_list[output_idx]
                    .wrapping_add(self.unique_list[output_idx + U16_SPAN_HALF]);
                entropy_list[entropy_idx] = trapdoor as u8;
                entropy_idx += 1;
                output_idx += 1;
                batch -= 1;
            }
            for _ in 0..batch >> 1 {
                let trapdoor = self.unique_list[output_idx]
                    .wrapping_add(self.unique_list[output_idx + U16_SPAN_HALF]);
                entropy_list[entropy_idx] = trapdoor as u8;
                entropy_list[entropy_idx + 1] = (trapdoor >> 8) as u8;
                entropy_idx += 2;
                output_idx += 1;
            }
            self.conclude_batch(output_idx);
        }
    }

    /// Fase actual del autómata.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Índice único actual (escritura en Accrue, lectura en Trapdoor).
    #[must_use]
    pub fn unique_idx(&self) -> u16 {
        self.unique_idx
    }

    /// Permutación de protoentropía, solo para auditoría de
    /// invariantes. Jamás emitir este contenido como entropía.
    #[must_use]
    pub fn unique_list(&self) -> &[u16] {
        &self.unique_list
    }

    /// Poblaciones del anillo de hashes de secuencia (auditoría).
    #[must_use]
    pub fn sequence_hash_count_list(&self) -> &[u16] {
        &self.sequence_hash_count_list
    }

    /// Anillo cronológico de hashes de secuencia (auditoría).
    #[must_use]
    pub fn sequence_hash_list(&self) -> &[u16] {
        &self.sequence_hash_list
    }
}
