// [apps/timedeltasave/src/main.rs]
/*!
 * =================================================================
 * APARATO: TIMEDELTA STREAM SAVER (V5.0 - FORENSIC CAPTURE)
 * CLASIFICACIÓN: APPLICATION LAYER (ENTRY POINT)
 * RESPONSABILIDAD: CAPTURA CRUDA DE TIMEDELTAS DE N BYTES A DISCO
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. SAMPLE-THEN-WRITE: Ninguna E/S de fichero ocurre hasta muestrear
 *    todos los timedeltas, para no confundir los efectos de la propia
 *    E/S con anomalías de temporización del host.
 * 2. WARMUP DISCARD: El primer delta se descarta por la plausible
 *    mispredicción de salto del bucle de lectura.
 * 3. TRUNCATED LANES: Cada timedelta viaja como los (mode+1) bytes
 *    bajos little-endian de la diferencia entre lecturas sucesivas.
 *
 * # Mathematical Proof (Wrap Closure):
 * La resta envolvente sobre los bytes bajos truncados coincide con el
 * truncamiento de la resta de los contadores completos: el carril de
 * N bytes es cerrado bajo diferencia modular.
 * =================================================================
 */

use anyhow::{bail, Context, Result};
use clap::Parser;
use entropics_core_enranda::prelude::{CycleSource, TscCycleSource};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/**
 * Directivas de mando del capturador forense.
 */
#[derive(Parser, Debug)]
#[command(
    author = "Raz Podesta <metaShark Tech>",
    version = "5.0",
    about = "Entropics Timedelta Saver // Captura cruda para análisis fuera de línea"
)]
struct SaverDirectives {
    /// Bytes por timedelta, menos uno, en [0, 7].
    mode: u8,

    /// Log2 del número de timedeltas a escribir.
    timedelta_count_log2: u8,

    /// Fichero de salida a sobreescribir.
    filename_to_overwrite: PathBuf,
}

fn main() -> Result<()> {
    entropics_shared_heimdall::init_tracing("timedeltasave");
    let directives = SaverDirectives::parse();
    if directives.mode > 7 {
        bail!("modo inválido: debe caer en [0, 7]");
    }
    let timedelta_sample_size = usize::from(directives.mode) + 1;
    if directives.timedelta_count_log2 > 48 {
        bail!("timedelta_count_log2 intratablemente grande (máximo 48)");
    }
    let timedelta_count: usize = 1usize << directives.timedelta_count_log2;
    // Dos lecturas extra: la primera se descarta por calentamiento y
    // la segunda ancla el primer delta.
    let timestamp_count = timedelta_count + 2;
    let timestamp_list_size = timestamp_count
        .checked_mul(timedelta_sample_size)
        .context("OVERFLOW_FAULT: el tamaño de captura excede el espacio de direcciones")?;
    let mut capture = Vec::new();
    capture
        .try_reserve_exact(timestamp_list_size)
        .context("ALLOC_FAULT: memoria insuficiente para la captura")?;
    capture.resize(timestamp_list_size, 0u8);
    info!(
        timedelta_count,
        timedelta_sample_size,
        "💠 [SAVER]: Leyendo contadores en memoria..."
    );
    let mut cycle_source = TscCycleSource;
    for chunk in capture.chunks_exact_mut(timedelta_sample_size) {
        let timestamp = cycle_source.read();
        chunk.copy_from_slice(&timestamp.to_le_bytes()[..timedelta_sample_size]);
    }
    info!("🔁 [SAVER]: Convirtiendo contadores en timedeltas...");
    convert_capture_to_timedeltas(&mut capture, timedelta_sample_size);
    let timedelta_list_size = timedelta_count * timedelta_sample_size;
    info!(path = %directives.filename_to_overwrite.display(), "💾 [SAVER]: Sellando captura...");
    let mut handle = File::create(&directives.filename_to_overwrite).with_context(|| {
        format!(
            "IO_FAULT: no se pudo abrir {} para escritura",
            directives.filename_to_overwrite.display()
        )
    })?;
    handle
        .write_all(&capture[..timedelta_list_size])
        .context("IO_FAULT: escritura de la captura fallida")?;
    handle.flush().context("IO_FAULT: cierre de fichero fallido")?;
    info!("🏁 [SAVER]: Captura sellada.");
    Ok(())
}

/// Carril truncado en la posición indicada, ensanchado a u64.
fn read_sample(capture: &[u8], sample_idx: usize, sample_size: usize) -> u64 {
    let mut lane = [0u8; 8];
    let byte_idx = sample_idx * sample_size;
    lane[..sample_size].copy_from_slice(&capture[byte_idx..byte_idx + sample_size]);
    u64::from_le_bytes(lane)
}

/**
 * Convierte in situ una captura de contadores en timedeltas.
 *
 * La primera lectura se descarta (calentamiento de predicción de
 * saltos); cada timedelta es la resta envolvente de dos lecturas
 * sucesivas, truncada a su carril de bytes. El resultado ocupa las
 * primeras (muestras − 2) posiciones de la captura.
 */
fn convert_capture_to_timedeltas(capture: &mut [u8], sample_size: usize) {
    let sample_count = capture.len() / sample_size;
    let mut previous = read_sample(capture, 1, sample_size);
    for sample_idx in 2..sample_count {
        let current = read_sample(capture, sample_idx, sample_size);
        let timedelta = current.wrapping_sub(previous);
        let byte_idx = (sample_idx - 2) * sample_size;
        capture[byte_idx..byte_idx + sample_size]
            .copy_from_slice(&timedelta.to_le_bytes()[..sample_size]);
        previous = current;
    }
}
