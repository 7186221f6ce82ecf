// [apps/otpenranda/src/main.rs]
/*!
 * =================================================================
 * APARATO: OTP MAKER SHELL (V5.0 - ENTROPY COURIER)
 * CLASIFICACIÓN: APPLICATION LAYER (ENTRY POINT)
 * RESPONSABILIDAD: EMISIÓN DE BLOQUES POTENCIA-DE-DOS DE ENTROPÍA
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. DUAL SINK: Con fichero, volcado binario little-endian; sin él,
 *    hexadecimal mayúsculo con saltos de línea periódicos.
 * 2. GRANULARITY SPLIT: Bloques de 8 bytes o más viajan por la ruta
 *    u64 (acarreo a lo ancho completo); los menores, por la ruta de
 *    bytes.
 * 3. ERROR TRIAGE: Todo fallo degrada a código de salida 1 con
 *    diagnóstico corto, sin estado persistido.
 *
 * # Mathematical Proof (Batch Alignment):
 * Cada transferencia es min(restante, 2^16) bytes; 2^16 es múltiplo de
 * las cuatro líneas de salida, luego los saltos de línea permanecen
 * alineados a través de las transferencias.
 * =================================================================
 */

use anyhow::{bail, Context, Result};
use clap::Parser;
use entropics_core_enranda::prelude::{Enranda, BUILD_BREAK_COUNT, ENTROPY_SIZE};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

/**
 * Directivas de mando del fabricante de libretas.
 */
#[derive(Parser, Debug)]
#[command(
    author = "Raz Podesta <metaShark Tech>",
    version = "5.0",
    about = "Entropics OTP Maker // Bloques verdadero-aleatorios desde Enranda"
)]
struct OtpDirectives {
    /// Log2 del número de bytes a emitir, en [0, 63].
    file_size_log2: u8,

    /// Fichero a sobreescribir con binario; omitir para hexadecimal
    /// mayúsculo por la salida estándar.
    filename_to_overwrite: Option<PathBuf>,
}

fn main() -> Result<()> {
    entropics_shared_heimdall::init_tracing("otpenranda");
    let directives = OtpDirectives::parse();
    if directives.file_size_log2 > 63 {
        bail!("file_size_log2 inválido: debe caer en [0, 63]");
    }
    let mut generator = Enranda::init(BUILD_BREAK_COUNT, 0)
        .context("INIT_FAULT: el generador Enranda rechazó la ignición")?;
    let total_bytes: u64 = 1u64 << directives.file_size_log2;
    // Ocho bytes o más: granularidad u64 para acarreo a lo ancho.
    let wide_path = directives.file_size_log2 >= 3;
    info!(
        total_bytes,
        wide_path,
        "💠 [OTP]: Ignición del correo de entropía."
    );
    let mut u64_buffer = vec![0u64; ENTROPY_SIZE >> 3];
    let mut u8_buffer = vec![0u8; ENTROPY_SIZE];
    match directives.filename_to_overwrite {
        Some(ref path) => {
            let handle = File::create(path)
                .with_context(|| format!("IO_FAULT: no se pudo abrir {} para escritura", path.display()))?;
            let mut sink = BufWriter::new(handle);
            let mut remaining = total_bytes;
            while remaining != 0 {
                let transfer_size = remaining.min(ENTROPY_SIZE as u64) as usize;
                if wide_path {
                    let word_count = transfer_size >> 3;
                    generator.fill_u64(&mut u64_buffer[..word_count]);
                    for &word in &u64_buffer[..word_count] {
                        sink.write_all(&word.to_le_bytes())
                            .context("IO_FAULT: escritura de bloque fallida")?;
                    }
                } else {
                    generator.fill_bytes(&mut u8_buffer[..transfer_size]);
                    sink.write_all(&u8_buffer[..transfer_size])
                        .context("IO_FAULT: escritura de bloque fallida")?;
                }
                remaining -= transfer_size as u64;
            }
            sink.flush().context("IO_FAULT: cierre de fichero fallido")?;
            info!(path = %path.display(), "🏁 [OTP]: Libreta sellada en disco.");
        }
        None => {
            let stdout_handle = std::io::stdout();
            let mut sink = BufWriter::new(stdout_handle.lock());
            let mut emitted_words = 0u64;
            let mut emitted_bytes = 0u64;
            let mut remaining = total_bytes;
            while remaining != 0 {
                let transfer_size = remaining.min(ENTROPY_SIZE as u64) as usize;
                if wide_path {
                    let word_count = transfer_size >> 3;
                    generator.fill_u64(&mut u64_buffer[..word_count]);
                    for &word in &u64_buffer[..word_count] {
                        write!(sink, "{word:016X}")?;
                        if emitted_words & 3 == 3 {
                            writeln!(sink)?;
                        }
                        emitted_words += 1;
                    }
                } else {
                    generator.fill_bytes(&mut u8_buffer[..transfer_size]);
                    for &byte in &u8_buffer[..transfer_size] {
                        write!(sink, "{byte:02X}")?;
                        if emitted_bytes & 0x1F == 0x1F {
                            writeln!(sink)?;
                        }
                        emitted_bytes += 1;
                    }
                }
                remaining -= transfer_size as u64;
            }
            writeln!(sink)?;
            sink.flush()?;
        }
    }
    Ok(())
}
