// [tests/mirror/libs/core/enranda/trapdoor_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DE TRAPDOOR (V7.0 - CARRY CONTINUITY)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L2-ENRANDA-MIRROR
 * RESPONSABILIDAD: COMPLETITUD DE LOTE Y CONTINUIDAD DE ACARREO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. BATCH COMPLETENESS: Una transición a Trapdoor rinde exactamente
 *    2^15 u16 / 2^14 u32 / 2^13 u64 / 2^16 bytes antes de reentrar en
 *    acumulación.
 * 2. CARRY CONTINUITY: Las salidas anchas igualan (a + b) mod 2^w con
 *    a y b leídos little-endian de mitades disjuntas de la
 *    permutación.
 * 3. JITTER CLOCK: Un reloj sintético con jitter LCG garantiza
 *    novedades abundantes y llenado determinista.
 * =================================================================
 */

use entropics_core_enranda::prelude::*;
use serde_json::json;

const U16_SPAN_HALF: usize = 1 << 15;

/// Reloj sintético con jitter determinista de estado LCG.
struct JitterClock {
    tick: u64,
    state: u64,
}

impl JitterClock {
    fn new(seed: u64) -> Self {
        Self {
            tick: 0,
            state: seed.max(1),
        }
    }
}

impl CycleSource for JitterClock {
    fn read(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.tick += (self.state >> 33) & 0x3FF | 1;
        self.tick
    }
}

#[test]
fn certify_batch_completeness_all_granularities() {
    println!("\n🚪 [INICIO]: Auditoría de completitud de lote V7.0...");
    let mut forensic_bitacora = String::new();
    let mut integrity_faults = 0u32;

    // u16: 2^15 palabras exactas por lote.
    let mut generator =
        Enranda::with_source(JitterClock::new(3), BUILD_BREAK_COUNT, 0).expect("ignición");
    generator.accrue(true);
    let mut u16_batch = vec![0u16; ENTROPY_U16_COUNT];
    generator.fill_u16(&mut u16_batch);
    if generator.phase() != Phase::Accrue {
        integrity_faults += 1;
        forensic_bitacora.push_str("❌ U16: el lote exacto no reabrió la acumulación.\n");
    }

    // u32: 2^14 palabras exactas por lote.
    let mut generator =
        Enranda::with_source(JitterClock::new(5), BUILD_BREAK_COUNT, 0).expect("ignición");
    generator.accrue(true);
    let mut u32_batch = vec![0u32; ENTROPY_U32_COUNT];
    generator.fill_u32(&mut u32_batch);
    if generator.phase() != Phase::Accrue {
        integrity_faults += 1;
        forensic_bitacora.push_str("❌ U32: el lote exacto no reabrió la acumulación.\n");
    }

    // u64: 2^13 palabras exactas por lote.
    let mut generator =
        Enranda::with_source(JitterClock::new(7), BUILD_BREAK_COUNT, 0).expect("ignición");
    generator.accrue(true);
    let mut u64_batch = vec![0u64; ENTROPY_U64_COUNT];
    generator.fill_u64(&mut u64_batch);
    if generator.phase() != Phase::Accrue {
        integrity_faults += 1;
        forensic_bitacora.push_str("❌ U64: el lote exacto no reabrió la acumulación.\n");
    }

    // bytes: 2^16 exactos por lote.
    let mut generator =
        Enranda::with_source(JitterClock::new(11), BUILD_BREAK_COUNT, 0).expect("ignición");
    generator.accrue(true);
    let mut byte_batch = vec![0u8; ENTROPY_SIZE];
    generator.fill_bytes(&mut byte_batch);
    if generator.phase() != Phase::Accrue {
        integrity_faults += 1;
        forensic_bitacora.push_str("❌ U8: el lote exacto no reabrió la acumulación.\n");
    }

    let verdict = if integrity_faults == 0 { "SOVEREIGN" } else { "COMPROMISED" };
    let payload = json!({
        "testName": "trapdoor_integrity",
        "stratum": "L2_ENRANDA",
        "verdict": verdict,
        "metrics": { "error_rate": integrity_faults },
        "forensicLog": forensic_bitacora,
    });
    println!("{payload}");
    assert_eq!(integrity_faults, 0, "{forensic_bitacora}");
    println!("   ✅ Completitud de lote: SOBERANA en las cuatro granularidades.");
}

#[test]
fn certify_wide_carry_continuity() {
    println!("\n🚪 [INICIO]: Auditoría de continuidad de acarreo V7.0...");
    let mut generator =
        Enranda::with_source(JitterClock::new(13), BUILD_BREAK_COUNT, 0).expect("ignición");
    generator.accrue(true);
    let permutation: Vec<u16> = generator.unique_list().to_vec();
    // u32: concatenación little-endian de dos u16 por mitad.
    let mut u32_batch = vec![0u32; 128];
    generator.fill_u32(&mut u32_batch);
    for (word_idx, &word) in u32_batch.iter().enumerate() {
        let base = word_idx * 2;
        let low = u32::from(permutation[base]) | (u32::from(permutation[base + 1]) << 16);
        let high = u32::from(permutation[base + U16_SPAN_HALF])
            | (u32::from(permutation[base + U16_SPAN_HALF + 1]) << 16);
        assert_eq!(word, low.wrapping_add(high));
    }
    println!("   ✅ Acarreo u32 certificado sobre 128 palabras.");
    // u64 sobre un generador fresco: cuatro u16 por mitad.
    let mut generator =
        Enranda::with_source(JitterClock::new(17), BUILD_BREAK_COUNT, 0).expect("ignición");
    generator.accrue(true);
    let permutation: Vec<u16> = generator.unique_list().to_vec();
    let mut u64_batch = vec![0u64; 64];
    generator.fill_u64(&mut u64_batch);
    for (word_idx, &word) in u64_batch.iter().enumerate() {
        let base = word_idx * 4;
        let mut low = 0u64;
        let mut high = 0u64;
        for lane in 0..4 {
            low |= u64::from(permutation[base + lane]) << (lane * 16);
            high |= u64::from(permutation[base + lane + U16_SPAN_HALF]) << (lane * 16);
        }
        assert_eq!(word, low.wrapping_add(high));
    }
    println!("   ✅ Acarreo u64 certificado sobre 64 palabras.");
}

#[test]
fn certify_interleaved_consumption_progress() {
    // Consumos entremezclados de distintas granularidades progresan
    // por la misma permutación sin solaparse.
    let mut generator =
        Enranda::with_source(JitterClock::new(19), BUILD_BREAK_COUNT, 0).expect("ignición");
    generator.accrue(true);
    let permutation: Vec<u16> = generator.unique_list().to_vec();
    let mut u16_words = vec![0u16; 2];
    generator.fill_u16(&mut u16_words);
    assert_eq!(generator.unique_idx(), 2);
    let mut u32_words = vec![0u32; 1];
    generator.fill_u32(&mut u32_words);
    assert_eq!(generator.unique_idx(), 4);
    let expected_u32 = {
        let low = u32::from(permutation[2]) | (u32::from(permutation[3]) << 16);
        let high = u32::from(permutation[2 + U16_SPAN_HALF])
            | (u32::from(permutation[3 + U16_SPAN_HALF]) << 16);
        low.wrapping_add(high)
    };
    assert_eq!(u32_words[0], expected_u32);
    let mut bytes = vec![0u8; 3];
    generator.fill_bytes(&mut bytes);
    // Byte impar primero (quema el trapdoor 4), luego el par completo
    // del trapdoor 5.
    assert_eq!(generator.unique_idx(), 6);
}
