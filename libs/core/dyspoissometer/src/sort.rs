// [libs/core/dyspoissometer/src/sort.rs]
/*!
 * =================================================================
 * APARATO: RADIX SORT ENGINE (V12.0 - DOUBLE BUFFER SOVEREIGN)
 * CLASIFICACIÓN: CORE DYSPOISSOMETER (ESTRATO L2)
 * RESPONSABILIDAD: ORDENACIÓN LSD POR CARRILES DE BYTE, ESTABLE
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. DOUBLE BUFFER: El invocador aporta el búfer de rebote; cada
 *    carril dispersa de un búfer al otro sin reservas internas.
 * 2. MONOTONIC SHORT-CIRCUIT: El censo de cada carril detecta orden
 *    ascendente global y aborta los carriles restantes.
 * 3. BIT-PATTERN KEYS: Los flotantes se ordenan por su representación
 *    binaria vía 'to_bits'; los valores negativos jamás llegan aquí
 *    porque todos los logaritmos aguas arriba se saturan en cero.
 *
 * # Mathematical Proof (Stability):
 * La dispersión por conteo preserva el orden relativo de claves
 * iguales en cada carril; la composición de permutaciones estables es
 * estable, luego el resultado final es una permutación estable.
 * =================================================================
 */

use entropics_core_numeric::prelude::{Number, Uint, UINT_SIZE};

/// Cubetas por carril de byte.
const BUCKET_SPAN: usize = 256;

/// Clave ordenable por carriles de byte little-endian.
pub(crate) trait RadixKey: Copy {
    /// Número de carriles de byte de la clave.
    const LANE_COUNT: usize;
    /// Byte del carril indicado.
    fn lane_byte(self, lane: usize) -> usize;
    /// Orden no descendente bajo la misma proyección que los carriles.
    fn precedes_or_equals(self, other: Self) -> bool;
}

impl RadixKey for Uint {
    const LANE_COUNT: usize = UINT_SIZE;

    #[inline]
    fn lane_byte(self, lane: usize) -> usize {
        ((self >> (lane * 8)) & 0xFF) as usize
    }

    #[inline]
    fn precedes_or_equals(self, other: Self) -> bool {
        self <= other
    }
}

impl RadixKey for Number {
    const LANE_COUNT: usize = core::mem::size_of::<Number>();

    #[inline]
    fn lane_byte(self, lane: usize) -> usize {
        ((self.to_bits() >> (lane * 8)) & 0xFF) as usize
    }

    #[inline]
    fn precedes_or_equals(self, other: Self) -> bool {
        self.to_bits() <= other.to_bits()
    }
}

/// Censo de un carril: histograma de 256 cubetas más el veredicto de
/// orden ascendente global (que habilita la terminación temprana).
fn lane_census<K: RadixKey>(source: &[K], lane: usize) -> ([usize; BUCKET_SPAN], bool) {
    let mut histogram = [0usize; BUCKET_SPAN];
    let mut ascending = true;
    let mut previous = source[0];
    for &key in source {
        ascending &= previous.precedes_or_equals(key);
        histogram[key.lane_byte(lane)] += 1;
        previous = key;
    }
    (histogram, ascending)
}

/// Convierte el histograma en sumas acumuladas excluyentes (offset de
/// escritura inicial por cubeta).
fn exclusive_scan(histogram: &mut [usize; BUCKET_SPAN]) {
    let mut running = 0usize;
    for bucket in histogram.iter_mut() {
        let count = *bucket;
        *bucket = running;
        running += count;
    }
}

/**
 * Ordena ascendentemente una lista de Uint con doble búfer.
 *
 * # Contrato:
 * 'scratch' debe tener la misma longitud que 'list'; su contenido de
 * salida es indefinido. Claves iguales conservan su orden relativo.
 */
pub fn uint_list_sort(list: &mut [Uint], scratch: &mut [Uint]) {
    radix_sort_engine(list, scratch);
}

/**
 * Ordena ascendentemente una lista de Number por patrón de bits.
 *
 * Válido porque aguas arriba ningún valor negativo sobrevive a la
 * saturación en cero de los logaritmos.
 */
pub fn number_list_sort(list: &mut [Number], scratch: &mut [Number]) {
    radix_sort_engine(list, scratch);
}

fn radix_sort_engine<K: RadixKey>(list: &mut [K], scratch: &mut [K]) {
    debug_assert_eq!(list.len(), scratch.len());
    if list.len() < 2 {
        return;
    }
    let mut in_scratch = false;
    for lane in 0..K::LANE_COUNT {
        let (mut histogram, ascending) = {
            let source: &[K] = if in_scratch { scratch } else { list };
            lane_census(source, lane)
        };
        if ascending {
            break;
        }
        exclusive_scan(&mut histogram);
        if in_scratch {
            scatter_lane(scratch, list, lane, &mut histogram);
        } else {
            scatter_lane(list, scratch, lane, &mut histogram);
        }
        in_scratch = !in_scratch;
    }
    if in_scratch {
        list.copy_from_slice(scratch);
    }
}

fn scatter_lane<K: RadixKey>(
    source: &[K],
    destination: &mut [K],
    lane: usize,
    offsets: &mut [usize; BUCKET_SPAN],
) {
    for &key in source {
        let bucket = key.lane_byte(lane);
        destination[offsets[bucket]] = key;
        offsets[bucket] += 1;
    }
}

/**
 * Ordena ascendentemente una lista de Uint arrastrando una lista de
 * índices paralela a través de la misma permutación estable.
 *
 * # Contrato:
 * Las cuatro listas comparten longitud. Al retornar, 'list' queda
 * ordenada, 'idx_list' reordenada con la permutación idéntica, y ambos
 * búferes de rebote quedan indefinidos. Diseñado para ordenar por una
 * clave escalar recuperando las posiciones originales.
 */
pub fn uint_idx_list_sort(
    idx_list: &mut [Uint],
    idx_scratch: &mut [Uint],
    list: &mut [Uint],
    scratch: &mut [Uint],
) {
    debug_assert_eq!(list.len(), scratch.len());
    debug_assert_eq!(list.len(), idx_list.len());
    debug_assert_eq!(list.len(), idx_scratch.len());
    if list.len() < 2 {
        return;
    }
    let mut in_scratch = false;
    for lane in 0..UINT_SIZE {
        let (mut histogram, ascending) = {
            let source: &[Uint] = if in_scratch { scratch } else { list };
            lane_census(source, lane)
        };
        if ascending {
            break;
        }
        exclusive_scan(&mut histogram);
        if in_scratch {
            scatter_idx_lane(scratch, list, idx_scratch, idx_list, lane, &mut histogram);
        } else {
            scatter_idx_lane(list, scratch, idx_list, idx_scratch, lane, &mut histogram);
        }
        in_scratch = !in_scratch;
    }
    if in_scratch {
        list.copy_from_slice(scratch);
        idx_list.copy_from_slice(idx_scratch);
    }
}

fn scatter_idx_lane(
    source: &[Uint],
    destination: &mut [Uint],
    idx_source: &[Uint],
    idx_destination: &mut [Uint],
    lane: usize,
    offsets: &mut [usize; BUCKET_SPAN],
) {
    for (&key, &idx) in source.iter().zip(idx_source) {
        let bucket = key.lane_byte(lane);
        let slot = offsets[bucket];
        destination[slot] = key;
        idx_destination[slot] = idx;
        offsets[bucket] += 1;
    }
}
