//! Approximation coefficients and split constants.
//!
//! The `_HI` halves of split constants carry enough trailing zero bits that
//! multiplying them by the small integers arising in argument reduction is
//! exact.

#![allow(clippy::excessive_precision)]

use super::CoefficientTable;

pub const HUGE: f64 = 1.0e300;
pub const TINY: f64 = 1.0e-300;

pub const TWO53: f64 = 9007199254740992.0; /* 0x43400000, 0x00000000 */

/// Added to inexact constant results so they round like a computed value.
pub const X1P_120: f64 = 7.52316384526264e-37; /* 0x38700000, 0x00000000 */

// exp

pub const EXP_OVERFLOW: f64 = 709.782712893383973096; /* 0x40862E42, 0xFEFA39EF */
pub const EXP_UNDERFLOW: f64 = -745.13321910194110842; /* 0xC0874910, 0xD52D3051 */

pub const LN2_HI: f64 = 6.93147180369123816490e-01; /* 0x3fe62e42, 0xfee00000 */
pub const LN2_LO: f64 = 1.90821492927058770002e-10; /* 0x3dea39ef, 0x35793c76 */
pub const INV_LN2: f64 = 1.44269504088896338700e+00; /* 0x3ff71547, 0x652b82fe */

pub const HALF: [f64; 2] = [0.5, -0.5];

/// `R(r^2)` with `r * (e^r + 1) / (e^r - 1) = 2 + R`, in powers of `r^2`.
pub const EXP_P: CoefficientTable<5> = CoefficientTable {
    name: "exp",
    coefficients: [
        1.66666666666666019037e-01,  /* 0x3FC55555, 0x5555553E */
        -2.77777777770155933842e-03, /* 0xBF66C16C, 0x16BEBD93 */
        6.61375632143793436117e-05,  /* 0x3F11566A, 0xAF25DE2C */
        -1.65339022054652515390e-06, /* 0xBEBBBD41, 0xC5D26BF1 */
        4.13813679705723846039e-08,  /* 0x3E663769, 0x72BEA4D0 */
    ],
};

// log, log10

/// Odd-indexed terms of `log(1+f) = f - f^2/2 + s*(f^2/2 + R)`, in powers of
/// `s^4`.
pub const LG_ODD: CoefficientTable<4> = CoefficientTable {
    name: "log (odd)",
    coefficients: [
        6.666666666666735130e-01, /* 3FE55555 55555593 */
        2.857142874366239149e-01, /* 3FD24924 94229359 */
        1.818357216161805012e-01, /* 3FC74664 96CB03DE */
        1.479819860511658591e-01, /* 3FC2F112 DF3E5244 */
    ],
};

pub const LG_EVEN: CoefficientTable<3> = CoefficientTable {
    name: "log (even)",
    coefficients: [
        3.999999999940941908e-01, /* 3FD99999 9997FA04 */
        2.222219843214978396e-01, /* 3FCC71C5 1D8E78AF */
        1.531383769920937332e-01, /* 3FC39A09 D078C69F */
    ],
};

pub const IVLN10_HI: f64 = 4.34294481878168880939e-01; /* 0x3fdbcb7b, 0x15200000 */
pub const IVLN10_LO: f64 = 2.50829467116452752298e-11; /* 0x3dbb9438, 0xca9aadd5 */
pub const LOG10_2_HI: f64 = 3.01029995663611771306e-01; /* 0x3FD34413, 0x509F6000 */
pub const LOG10_2_LO: f64 = 3.69423907715893078616e-13; /* 0x3D59FEF3, 0x11F12B36 */

// pow

pub const BP: [f64; 2] = [1.0, 1.5];
pub const DP_H: [f64; 2] = [0.0, 5.84962487220764160156e-01]; /* 0x3FE2B803, 0x40000000 */
pub const DP_L: [f64; 2] = [0.0, 1.35003920212974897128e-08]; /* 0x3E4CFDEB, 0x43CFD006 */

/// `(3/2) * (log(x) - 2s - (2/3)s^3)` in powers of `s^2`.
pub const POW_L: CoefficientTable<6> = CoefficientTable {
    name: "pow",
    coefficients: [
        5.99999999999994648725e-01, /* 0x3FE33333, 0x33333303 */
        4.28571428578550184252e-01, /* 0x3FDB6DB6, 0xDB6FABFF */
        3.33333329818377432918e-01, /* 0x3FD55555, 0x518F264D */
        2.72728123808534006489e-01, /* 0x3FD17460, 0xA91D4101 */
        2.30660745775561754067e-01, /* 0x3FCD864A, 0x93C9DB65 */
        2.06975017800338417784e-01, /* 0x3FCA7E28, 0x4A454EEF */
    ],
};

pub const LG2: f64 = 6.93147180559945286227e-01; /* 0x3FE62E42, 0xFEFA39EF */
pub const LG2_H: f64 = 6.93147182464599609375e-01; /* 0x3FE62E43, 0x00000000 */
pub const LG2_L: f64 = -1.90465429995776804525e-09; /* 0xBE205C61, 0x0CA86C39 */

/// `-(1024 - log2(overflow + 0.5ulp))`.
pub const OVT: f64 = 8.0085662595372944372e-17;

pub const CP: f64 = 9.61796693925975554329e-01; /* 0x3FEEC709, 0xDC3A03FD */
pub const CP_H: f64 = 9.61796700954437255859e-01; /* 0x3FEEC709, 0xE0000000 */
pub const CP_L: f64 = -7.02846165095275826516e-09; /* 0xBE3E2FE0, 0x145B01F5 */

pub const IVLN2: f64 = 1.44269504088896338700e+00; /* 0x3FF71547, 0x652B82FE */
pub const IVLN2_H: f64 = 1.44269502162933349609e+00; /* 0x3FF71547, 0x60000000 */
pub const IVLN2_L: f64 = 1.92596299112661746887e-08; /* 0x3E54AE0B, 0xF85DDF44 */

// asin, acos

pub const PIO2_HI: f64 = 1.57079632679489655800e+00; /* 0x3FF921FB, 0x54442D18 */
pub const PIO2_LO: f64 = 6.12323399573676603587e-17; /* 0x3C91A626, 0x33145C07 */

/// Numerator of `asin(x) = x + x*x^2*P(x^2)/Q(x^2)`.
pub const ASIN_P: CoefficientTable<6> = CoefficientTable {
    name: "asin (numerator)",
    coefficients: [
        1.66666666666666657415e-01,  /* 0x3FC55555, 0x55555555 */
        -3.25565818622400915405e-01, /* 0xBFD4D612, 0x03EB6F7D */
        2.01212532134862925881e-01,  /* 0x3FC9C155, 0x0E884455 */
        -4.00555345006794114027e-02, /* 0xBFA48228, 0xB5688F3B */
        7.91534994289814532176e-04,  /* 0x3F49EFE0, 0x7501B288 */
        3.47933107596021167570e-05,  /* 0x3F023DE1, 0x0DFDF709 */
    ],
};

/// Denominator of the same, without its constant term of one.
pub const ASIN_Q: CoefficientTable<4> = CoefficientTable {
    name: "asin (denominator)",
    coefficients: [
        -2.40339491173441421878e+00, /* 0xC0033A27, 0x1C8A2D4B */
        2.02094576023350569471e+00,  /* 0x40002AE5, 0x9C598AC8 */
        -6.88283971605453293030e-01, /* 0xBFE6066C, 0x1B8D0159 */
        7.70381505559019352791e-02,  /* 0x3FB3B8C5, 0xB12E9282 */
    ],
};

// atan, atan2

pub const PI: f64 = 3.1415926535897931160E+00; /* 0x400921FB, 0x54442D18 */
pub const PI_LO: f64 = 1.2246467991473531772E-16; /* 0x3CA1A626, 0x33145C07 */

/// `atan` at the centres of the reduction intervals: 0.5, 1, 1.5 and infinity.
pub const ATAN_HI: [f64; 4] = [
    4.63647609000806093515e-01, /* 0x3FDDAC67, 0x0561BB4F */
    7.85398163397448278999e-01, /* 0x3FE921FB, 0x54442D18 */
    9.82793723247329054082e-01, /* 0x3FEF730B, 0xD281F69B */
    1.57079632679489655800e+00, /* 0x3FF921FB, 0x54442D18 */
];

pub const ATAN_LO: [f64; 4] = [
    2.26987774529616870924e-17, /* 0x3C7A2B7F, 0x222F65E2 */
    3.06161699786838301793e-17, /* 0x3C81A626, 0x33145C07 */
    1.39033110312309984516e-17, /* 0x3C700788, 0x7AF0CBBD */
    6.12323399573676603587e-17, /* 0x3C91A626, 0x33145C07 */
];

/// Even-indexed terms of `atan(x) = x - x^3 * (T0 + T1*x^2 + ...)`, in powers
/// of `x^4`.
pub const ATAN_EVEN: CoefficientTable<6> = CoefficientTable {
    name: "atan (even)",
    coefficients: [
        3.33333333333329318027e-01, /* 0x3FD55555, 0x5555550D */
        1.42857142725034663711e-01, /* 0x3FC24924, 0x920083FF */
        9.09088713343650656196e-02, /* 0x3FB745CD, 0xC54C206E */
        6.66107313738753120669e-02, /* 0x3FB10D66, 0xA0D03D51 */
        4.97687799461593236017e-02, /* 0x3FA97B4B, 0x24760DEB */
        1.62858201153657823623e-02, /* 0x3F90AD3A, 0xE322DA11 */
    ],
};

pub const ATAN_ODD: CoefficientTable<5> = CoefficientTable {
    name: "atan (odd)",
    coefficients: [
        -1.99999999998764832476e-01, /* 0xBFC99999, 0x9998EBC4 */
        -1.11111104054623557880e-01, /* 0xBFBC71C6, 0xFE231671 */
        -7.69187620504482999495e-02, /* 0xBFB3B0F2, 0xAF749A6D */
        -5.83357013379057348645e-02, /* 0xBFADDE2D, 0x52DEFD9A */
        -3.65315727442169155270e-02, /* 0xBFA2B444, 0x2C6A6C2F */
    ],
};
