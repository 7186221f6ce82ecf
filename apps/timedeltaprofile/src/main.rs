// [apps/timedeltaprofile/src/main.rs]
/*!
 * =================================================================
 * APARATO: TIMEDELTA PROFILER SHELL (V5.0 - REALTIME LENS)
 * CLASIFICACIÓN: APPLICATION LAYER (ENTRY POINT)
 * RESPONSABILIDAD: PERFIL ESTADÍSTICO DE TIMEDELTAS EN VIVO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SIX READOUTS: Dyspoissonismo, media e histograma por MSB, cada
 *    uno en decimal o como fracción hexadecimal donde 2^63 es la
 *    unidad.
 * 2. CONTINUOUS MODES: Una pasada, una pasada CSV, bucle hasta Ctrl+C
 *    y bucle CSV; la señal se sella con un AtomicBool compartido.
 * 3. OBSERVER EFFECT AWARENESS: El propio muestreo deforma el
 *    histograma del host; solo comparaciones con log2q constante son
 *    significativas.
 *
 * # Mathematical Proof (Mean Headroom):
 * Con log2q <= 48 y deltas de 16 bits, Σ delta·freq < 2^64: la media
 * se acumula en u64 sin desborde.
 * =================================================================
 */

use anyhow::{bail, Context, Result};
use clap::Parser;
use entropics_core_dyspoisson::prelude::{dyspoissonism, logfreedom_sparse};
use entropics_core_enranda::prelude::{CycleSource, TscCycleSource};
use entropics_core_numeric::prelude::{Number, Uint};
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

const MODE_DYSPOISSONISM: u8 = 0;
const MODE_DYSPOISSONISM_HEX: u8 = 1;
const MODE_MEAN: u8 = 2;
const MODE_MEAN_HEX: u8 = 3;
const MODE_HISTOGRAM: u8 = 4;
const MODE_HISTOGRAM_HEX: u8 = 5;
const TIMEDELTA_COUNT_LOG2_MIN: u8 = 16;
const TIMEDELTA_COUNT_LOG2_MAX: u8 = 48;
const U16_SPAN: usize = 1 << 16;

/**
 * Directivas de mando del perfilador.
 */
#[derive(Parser, Debug)]
#[command(
    author = "Raz Podesta <metaShark Tech>",
    version = "5.0",
    about = "Entropics Timedelta Profiler // Lente estadística del jitter del host"
)]
struct ProfilerDirectives {
    /// Lectura a mostrar: 0 dyspoissonismo, 1 ídem hex, 2 media,
    /// 3 ídem hex, 4 histograma log2, 5 ídem hex.
    mode: u8,

    /// 0 una pasada, 1 una pasada CSV, 2 continuo hasta Ctrl+C,
    /// 3 continuo CSV.
    continuous: u8,

    /// Log2 del número de timedeltas por lectura, en [16, 48].
    timedelta_count_log2: u8,
}

fn main() -> Result<()> {
    entropics_shared_heimdall::init_tracing("timedeltaprofile");
    let directives = ProfilerDirectives::parse();
    if directives.mode > MODE_HISTOGRAM_HEX {
        bail!("modo inválido: debe caer en [0, 5]");
    }
    if directives.continuous > 3 {
        bail!("indicador continuo inválido: debe caer en [0, 3]");
    }
    if directives.timedelta_count_log2 < TIMEDELTA_COUNT_LOG2_MIN {
        bail!("timedelta_count_log2 demasiado pequeño para ser útil (mínimo 16)");
    }
    if directives.timedelta_count_log2 > TIMEDELTA_COUNT_LOG2_MAX {
        bail!("timedelta_count_log2 intratablemente grande (máximo 48)");
    }
    entropics_core_dyspoisson::init(entropics_core_dyspoisson::BUILD_BREAK_COUNT, 0)
        .context("INIT_FAULT: motor dyspoissométrico desactualizado")?;
    let csv_status = directives.continuous & 1 == 1;
    let continuous_status = directives.continuous >> 1 == 1;
    let running = Arc::new(AtomicBool::new(true));
    let running_signal = Arc::clone(&running);
    ctrlc::set_handler(move || {
        running_signal.store(false, Ordering::SeqCst);
    })
    .context("SIGNAL_FAULT: no se pudo armar el manejador de Ctrl+C")?;
    let timedelta_count: u64 = 1u64 << directives.timedelta_count_log2;
    info!(
        mode = directives.mode,
        timedelta_count,
        continuous_status,
        "💠 [PROFILER]: Lente estadística armada."
    );
    let mut cycle_source = TscCycleSource;
    let mut freq_list = vec![0 as Uint; U16_SPAN];
    let mut freq_scratch = vec![0 as Uint; U16_SPAN];
    let stdout_handle = std::io::stdout();
    loop {
        freq_list.fill(0);
        // Muestreo caliente: solo el bucle de lectura toca memoria.
        let mut time: u16 = 0;
        for _ in 0..timedelta_count {
            let time_previous = time;
            time = cycle_source.read() as u16;
            freq_list[time.wrapping_sub(time_previous) as usize] += 1;
        }
        let mut sink = stdout_handle.lock();
        match directives.mode {
            MODE_DYSPOISSONISM | MODE_DYSPOISSONISM_HEX => {
                let logfreedom = logfreedom_sparse(&mut freq_list, &mut freq_scratch);
                let mask_idx_max = (timedelta_count - 1) as Uint;
                let readout = dyspoissonism(logfreedom, mask_idx_max, (U16_SPAN - 1) as Uint);
                if directives.mode == MODE_DYSPOISSONISM {
                    write!(sink, "{readout:+.15E}")?;
                } else {
                    let hex_fraction = (readout * (1u64 << 63) as Number) as u64;
                    write!(sink, "{hex_fraction:016X}")?;
                }
            }
            MODE_MEAN | MODE_MEAN_HEX => {
                let mut timedelta_sum = 0u64;
                for (timedelta, &freq) in freq_list.iter().enumerate() {
                    timedelta_sum += timedelta as u64 * freq as u64;
                }
                let timedelta_mean = timedelta_sum as Number / timedelta_count as Number;
                if directives.mode == MODE_MEAN {
                    write!(sink, "{timedelta_mean:+.15E}")?;
                } else {
                    write!(sink, "{:016X}", timedelta_mean as u64)?;
                }
            }
            _ => {
                // Histograma de log2(freq) por bucket de MSB.
                let msb_max = directives.timedelta_count_log2 as usize;
                let mut msb_pop_list = vec![0u64; TIMEDELTA_COUNT_LOG2_MAX as usize + 1];
                for &freq in freq_list.iter() {
                    let mut msb = 0usize;
                    while (freq >> msb) > 1 {
                        msb += 1;
                    }
                    msb_pop_list[msb] += freq as u64;
                }
                for (msb, &pop) in msb_pop_list.iter().enumerate().take(msb_max + 1) {
                    if directives.mode == MODE_HISTOGRAM {
                        let pop_normalized = pop as Number / timedelta_count as Number;
                        write!(sink, "{msb:02}: {pop_normalized:+.15E}")?;
                    } else {
                        let pop_scaled = pop << (63 - directives.timedelta_count_log2);
                        write!(sink, "{msb:02}: {pop_scaled:016X}")?;
                    }
                    if csv_status && msb != msb_max {
                        write!(sink, ", ")?;
                    } else {
                        writeln!(sink)?;
                    }
                }
                if !csv_status {
                    writeln!(sink)?;
                }
            }
        }
        if directives.mode <= MODE_MEAN_HEX {
            if csv_status {
                write!(sink, ", ")?;
            } else {
                writeln!(sink)?;
            }
        }
        sink.flush()?;
        drop(sink);
        if !continuous_status || !running.load(Ordering::SeqCst) {
            break;
        }
    }
    info!("🏁 [PROFILER]: Lente replegada.");
    Ok(())
}
