// [libs/shared/heimdall/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: HEIMDALL NEURAL OBSERVER (V8.0 - LOCAL SENTINEL)
 * CLASIFICACIÓN: SHARED UTILITY (ESTRATO L4)
 * RESPONSABILIDAD: GESTIÓN DE TELEMETRÍA, TRAZADO Y CAPTURA DE PÁNICOS
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. DUAL MODE: Logs compactos y legibles en desarrollo; tramas JSON
 *    planas en producción para ingesta programática.
 * 2. PHOENIX SHIELD: Hook de pánico que vuelca coordenadas de estrato
 *    y payload forense por el canal de trazas antes de la defunción.
 * 3. FILTER SOVEREIGNTY: Prioriza los logs del dominio y acepta
 *    sobreescritura vía entorno estándar.
 *
 * # Mathematical Proof (Observability Integrity):
 * La arquitectura de registro síncrona garantiza que el rastro de
 * ejecución preceda a cualquier terminación abrupta del proceso.
 * =================================================================
 */

use std::panic;
use tracing::error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt as formatting_layer, EnvFilter};

/// Inicializa el sistema de trazas Heimdall con blindaje de pánicos.
///
/// # Comportamiento:
/// - Desarrollo: logs compactos sin target, nivel debug.
/// - Producción: estructura JSON plana, nivel info.
///
/// # Panics:
/// Si otro suscriptor global ya fue inicializado en el runtime.
pub fn init_tracing(service_nominal_identifier: &str) {
    let environmental_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if cfg!(debug_assertions) { "debug" } else { "info" };
        format!("{service_nominal_identifier}={level},warn").into()
    });

    let is_production_strata = !cfg!(debug_assertions);
    if is_production_strata {
        tracing_subscriber::registry()
            .with(environmental_filter)
            .with(formatting_layer::layer().json().flatten_event(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(environmental_filter)
            .with(formatting_layer::layer().compact().with_target(false))
            .init();
    }

    // PROTOCOLO PHOENIX SHIELD: todo colapso queda trazado antes de la
    // defunción del proceso.
    let service_id_snapshot = service_nominal_identifier.to_string();
    panic::set_hook(Box::new(move |panic_metadata| {
        let panic_location = panic_metadata
            .location()
            .map(|location| {
                format!(
                    "{}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
            })
            .unwrap_or_else(|| "UNKNOWN_STRATA_COORDINATES".to_string());
        let panic_payload_message = panic_metadata
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| {
                panic_metadata
                    .payload()
                    .downcast_ref::<String>()
                    .map(String::as_str)
            })
            .unwrap_or("OPAQUE_PANIC_PAYLOAD");
        error!(
            service = %service_id_snapshot,
            location = %panic_location,
            payload = %panic_payload_message,
            "💀 [PHOENIX]: Colapso de estrato capturado."
        );
    }));
}
