// [tests/mirror/libs/core/enranda/accrual_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: CERTIFICADOR DE ACUMULACIÓN (V7.0 - RING & PERMUTATION)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L2-ENRANDA-MIRROR
 * RESPONSABILIDAD: INVARIANTES DE ANILLO Y PERMUTACIÓN BAJO RELOJ FALSO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. COUNTER CLOCK: Un contador sintético de paso unitario certifica
 *    el autómata sin jitter real: los invariantes sobreviven incluso
 *    al peor reloj imaginable.
 * 2. RING LAW: Σ poblaciones == 2^16 y cada población cuadra con el
 *    censo del anillo cronológico tras cada paso.
 * 3. NOVELTY EMERGENCE: Incluso con deltas constantes, el hash
 *    sacacorchos produce al menos una secuencia inédita en 2^16 pasos.
 *
 * # Mathematical Proof (Novelty Emergence):
 * Con delta constante 1, el hash evoluciona como la órbita de la
 * biyección x -> rotr(x, 3) + 1; la órbita alcanza valores ya
 * desalojados del anillo identidad en menos de 2^16 pasos, y el primer
 * alcance constituye una novedad.
 * =================================================================
 */

use entropics_core_enranda::prelude::*;
use serde_json::json;

/// Reloj sintético de paso unitario: time_k == k.
struct UnitStrideClock {
    tick: u64,
}

impl CycleSource for UnitStrideClock {
    fn read(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }
}

fn certify_permutation(unique_list: &[u16]) -> bool {
    let mut seen = vec![false; 1 << 16];
    for &value in unique_list {
        if seen[value as usize] {
            return false;
        }
        seen[value as usize] = true;
    }
    true
}

fn certify_ring_census(generator_counts: &[u16], generator_ring: &[u16]) -> bool {
    let mut census = vec![0u16; 1 << 16];
    for &hash in generator_ring {
        census[hash as usize] += 1;
    }
    generator_counts == &census[..]
}

#[test]
fn certify_unit_stride_accrual_invariants() {
    println!("\n⏱️ [INICIO]: Auditoría de acumulación con reloj unitario V7.0...");
    let mut forensic_bitacora = String::new();
    let mut integrity_faults = 0u32;
    let mut generator = Enranda::with_source(
        UnitStrideClock { tick: 0 },
        BUILD_BREAK_COUNT,
        0,
    )
    .expect("ignición");

    // 1. FASE DE MARCHA: 2^16 pasos individuales de acumulación.
    println!("   🧪 Fase 1: 65536 pasos individuales...");
    let mut novelty_observed = false;
    for _ in 0..(1usize << 16) {
        let ready = generator.accrue(false);
        if ready || generator.unique_idx() != 0 || generator.phase() == Phase::Trapdoor {
            novelty_observed = true;
        }
    }
    if !novelty_observed {
        integrity_faults += 1;
        forensic_bitacora.push_str("❌ NOVELTY: ninguna secuencia inédita en 2^16 pasos.\n");
    } else {
        forensic_bitacora.push_str("✅ NOVELTY: secuencia inédita emergió del delta constante.\n");
    }

    // 2. FASE DE INVARIANTES: permutación y censo del anillo.
    println!("   🧪 Fase 2: Invariantes de permutación y anillo...");
    if !certify_permutation(generator.unique_list()) {
        integrity_faults += 1;
        forensic_bitacora.push_str("❌ PERMUTATION: unique_list dejó de ser permutación.\n");
    }
    let population_total: u64 = generator
        .sequence_hash_count_list()
        .iter()
        .map(|&count| u64::from(count))
        .sum();
    if population_total != 1 << 16 {
        integrity_faults += 1;
        forensic_bitacora.push_str("❌ RING: la población total abandonó 2^16.\n");
    }
    if !certify_ring_census(
        generator.sequence_hash_count_list(),
        generator.sequence_hash_list(),
    ) {
        integrity_faults += 1;
        forensic_bitacora.push_str("❌ RING: censo del anillo inconsistente.\n");
    }

    let verdict = if integrity_faults == 0 { "SOVEREIGN" } else { "COMPROMISED" };
    let payload = json!({
        "testName": "accrual_integrity",
        "stratum": "L2_ENRANDA",
        "verdict": verdict,
        "metrics": { "error_rate": integrity_faults },
        "forensicLog": forensic_bitacora,
    });
    println!("{payload}");
    assert_eq!(integrity_faults, 0, "{forensic_bitacora}");
    println!("   ✅ Acumulación con reloj unitario: SOBERANA.");
}

#[test]
fn certify_rewind_restores_initial_contract() {
    let mut generator = Enranda::with_source(
        UnitStrideClock { tick: 0 },
        BUILD_BREAK_COUNT,
        0,
    )
    .expect("ignición");
    for _ in 0..4096 {
        generator.accrue(false);
    }
    generator.rewind();
    assert_eq!(generator.phase(), Phase::Accrue);
    assert_eq!(generator.unique_idx(), 0);
    // Anillo identidad y poblaciones unitarias.
    assert!(generator
        .sequence_hash_count_list()
        .iter()
        .all(|&count| count == 1));
    for (idx, &hash) in generator.sequence_hash_list().iter().enumerate() {
        assert_eq!(hash, idx as u16);
    }
    for (idx, &value) in generator.unique_list().iter().enumerate() {
        assert_eq!(value, idx as u16);
    }
}

#[test]
fn certify_version_gate_contract() {
    assert!(Enranda::init(BUILD_BREAK_COUNT, BUILD_FEATURE_COUNT).is_ok());
    assert!(matches!(
        Enranda::init(BUILD_BREAK_COUNT + 1, 0),
        Err(EnrandaError::VersionMismatch { .. })
    ));
    assert!(matches!(
        Enranda::init(BUILD_BREAK_COUNT, BUILD_FEATURE_COUNT + 1),
        Err(EnrandaError::VersionMismatch { .. })
    ));
}
