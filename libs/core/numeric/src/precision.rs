// [libs/core/numeric/src/precision.rs]
/*!
 * =================================================================
 * APARATO: PRECISION SELECTION ENGINE (V9.0 - TRIPLE STRATA)
 * CLASIFICACIÓN: CORE NUMERIC (ESTRATO L1)
 * RESPONSABILIDAD: PAR (NUMBER, UINT) Y PRIMITIVAS TRASCENDENTES
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. TRIPLE STRATA: half=(f32,u16), single=(f64,u32), double=(f64,u64),
 *    conmutadas por feature en tiempo de compilación.
 * 2. LOG-GAMMA SOVEREIGNTY: lnΓ delegado a 'statrs', con exactitud del
 *    orden de 4 épsilon en la escala del resultado.
 * 3. NOMINAL PURITY: 'log_sum(n)' es Σ(ln i, i=1..n) = lnΓ(n+1);
 *    'log_sum_np1(n)' su variante para índices en lugar de conteos.
 *
 * # Mathematical Proof (Width Coupling):
 * El ancho de Uint acota el conteo de máscaras representable; Number
 * debe absorber lnΓ(UINT_MAX+1) sin desbordar, lo cual se cumple en
 * los tres estratos (lnΓ(2^64) ≈ 8.1e20 << f64::MAX).
 * =================================================================
 */

use statrs::function::gamma::ln_gamma;

#[cfg(not(any(
    feature = "precision-half",
    feature = "precision-single",
    feature = "precision-double"
)))]
compile_error!(
    "Debe seleccionar exactamente una precisión: active la feature 'precision-half', \
     'precision-single' o 'precision-double' de entropics-core-numeric."
);

#[cfg(any(
    all(feature = "precision-half", feature = "precision-single"),
    all(feature = "precision-half", feature = "precision-double"),
    all(feature = "precision-single", feature = "precision-double")
))]
compile_error!(
    "Ha seleccionado más de una precisión. Active solo una de: 'precision-half', \
     'precision-single', 'precision-double'."
);

/// Flotante del estrato half (enteros de 16 bits).
#[cfg(feature = "precision-half")]
pub type Number = f32;
/// Entero sin signo del estrato half.
#[cfg(feature = "precision-half")]
pub type Uint = u16;

/// Flotante del estrato single (enteros de 32 bits).
#[cfg(feature = "precision-single")]
pub type Number = f64;
/// Entero sin signo del estrato single.
#[cfg(feature = "precision-single")]
pub type Uint = u32;

/// Flotante del estrato double (enteros de 64 bits).
#[cfg(feature = "precision-double")]
pub type Number = f64;
/// Entero sin signo del estrato double.
#[cfg(feature = "precision-double")]
pub type Uint = u64;

/// Máximo valor representable por [`Uint`].
pub const UINT_MAX: Uint = Uint::MAX;

/// Ancho en bits de [`Uint`].
pub const UINT_BITS: u32 = Uint::BITS;

/// Índice del bit más significativo de [`Uint`].
pub const UINT_BIT_MAX: u32 = Uint::BITS - 1;

/// Tamaño en bytes de [`Uint`] (carriles del radix sort).
pub const UINT_SIZE: usize = core::mem::size_of::<Uint>();

/// Tamaño en bytes de [`Number`] (carriles del radix sort flotante).
pub const NUMBER_SIZE: usize = core::mem::size_of::<Number>();

/// Exponencial natural a la precisión seleccionada.
#[inline]
#[must_use]
pub fn exp(value: Number) -> Number {
    value.exp()
}

/// Logaritmo natural a la precisión seleccionada.
#[inline]
#[must_use]
pub fn log(value: Number) -> Number {
    value.ln()
}

/// Logaritmo natural de (n+1), promoviendo antes de incrementar para
/// que un Uint saturado no envuelva.
#[inline]
#[must_use]
pub fn log_np1(value: Uint) -> Number {
    ((value as f64) + 1.0).ln() as Number
}

/// Σ(ln i, i=1..n) evaluado como lnΓ(n+1).
///
/// Primitiva más invocada de toda la pila; la evaluación vía ln-gamma
/// la mantiene O(1) y con error del orden de épsilon, mientras que la
/// acumulación término a término sería O(n) y numéricamente inferior.
#[inline]
#[must_use]
pub fn log_sum(value: Uint) -> Number {
    ln_gamma((value as f64) + 1.0) as Number
}

/// Σ(ln i, i=1..n+1) evaluado como lnΓ(n+2).
///
/// Variante para índices (en lugar de conteos): evita que el invocador
/// incremente un Uint potencialmente saturado.
#[inline]
#[must_use]
pub fn log_sum_np1(value: Uint) -> Number {
    ln_gamma((value as f64) + 2.0) as Number
}

/// Raíz cuadrada a la precisión seleccionada.
#[inline]
#[must_use]
pub fn sqrt(value: Number) -> Number {
    value.sqrt()
}

/// Redondeo al entero más próximo a la precisión seleccionada.
#[inline]
#[must_use]
pub fn round(value: Number) -> Number {
    value.round()
}
