//! Lunar theory
//!
//! Truncation of the ELP-2000/82 main problem to its largest terms. Over
//! roughly 1950–2050 the result is good to an arc-minute or better in
//! longitude and latitude and a few hundred kilometres in distance; the error
//! grows slowly outside that window.
//!
//! Fundamental arguments, in this order throughout the tables:
//! `D` (mean elongation), `M` (Sun's mean anomaly), `M'` (Moon's mean
//! anomaly), `F` (mean distance of the Moon from its ascending node).

use super::series::{sum_cosines, sum_sines, unweighted, PeriodicTerm};
use crate::constants::AU_KM;
use crate::framelib::inertial::Ecliptic;
use crate::nutationlib::nutation_in_longitude;

type Term = PeriodicTerm<4>;

/// Index of the Sun's mean anomaly among the fundamental arguments
const SOLAR_ANOMALY: usize = 1;

/// Mean distance between the centres of the Earth and the Moon, km
const MEAN_DISTANCE_KM: f64 = 385_000.56;

/// Periodic terms in longitude, unit 1e-6 degree
const LONGITUDE_TERMS: [Term; 32] = [
    Term::new(6_288_774.0, [0, 0, 1, 0]),
    Term::new(1_274_027.0, [2, 0, -1, 0]),
    Term::new(658_314.0, [2, 0, 0, 0]),
    Term::new(213_618.0, [0, 0, 2, 0]),
    Term::new(-185_116.0, [0, 1, 0, 0]),
    Term::new(-114_332.0, [0, 0, 0, 2]),
    Term::new(58_793.0, [2, 0, -2, 0]),
    Term::new(57_066.0, [2, -1, -1, 0]),
    Term::new(53_322.0, [2, 0, 1, 0]),
    Term::new(45_758.0, [2, -1, 0, 0]),
    Term::new(-40_923.0, [0, 1, -1, 0]),
    Term::new(-34_720.0, [1, 0, 0, 0]),
    Term::new(-30_383.0, [0, 1, 1, 0]),
    Term::new(15_327.0, [2, 0, 0, -2]),
    Term::new(-12_528.0, [0, 0, 1, 2]),
    Term::new(10_980.0, [0, 0, 1, -2]),
    Term::new(10_675.0, [4, 0, -1, 0]),
    Term::new(10_034.0, [0, 0, 3, 0]),
    Term::new(8_548.0, [4, 0, -2, 0]),
    Term::new(-7_888.0, [2, 1, -1, 0]),
    Term::new(-6_766.0, [2, 1, 0, 0]),
    Term::new(-5_163.0, [1, 0, -1, 0]),
    Term::new(4_987.0, [1, 1, 0, 0]),
    Term::new(4_036.0, [2, -1, 1, 0]),
    Term::new(3_994.0, [2, 0, 2, 0]),
    Term::new(3_861.0, [4, 0, 0, 0]),
    Term::new(3_665.0, [2, 0, -3, 0]),
    Term::new(-2_689.0, [0, 1, -2, 0]),
    Term::new(-2_602.0, [2, 0, -1, 2]),
    Term::new(2_390.0, [2, -1, -2, 0]),
    Term::new(-2_348.0, [1, 0, 1, 0]),
    Term::new(2_236.0, [2, -2, 0, 0]),
];

/// Periodic terms in distance (cosines), unit metre
const DISTANCE_TERMS: [Term; 30] = [
    Term::new(-20_905_355.0, [0, 0, 1, 0]),
    Term::new(-3_699_111.0, [2, 0, -1, 0]),
    Term::new(-2_955_968.0, [2, 0, 0, 0]),
    Term::new(-569_925.0, [0, 0, 2, 0]),
    Term::new(48_888.0, [0, 1, 0, 0]),
    Term::new(-3_149.0, [0, 0, 0, 2]),
    Term::new(246_158.0, [2, 0, -2, 0]),
    Term::new(-152_138.0, [2, -1, -1, 0]),
    Term::new(-170_733.0, [2, 0, 1, 0]),
    Term::new(-204_586.0, [2, -1, 0, 0]),
    Term::new(-129_620.0, [0, 1, -1, 0]),
    Term::new(108_743.0, [1, 0, 0, 0]),
    Term::new(104_755.0, [0, 1, 1, 0]),
    Term::new(10_321.0, [2, 0, 0, -2]),
    Term::new(79_661.0, [0, 0, 1, -2]),
    Term::new(-34_782.0, [4, 0, -1, 0]),
    Term::new(-23_210.0, [0, 0, 3, 0]),
    Term::new(-21_636.0, [4, 0, -2, 0]),
    Term::new(24_208.0, [2, 1, -1, 0]),
    Term::new(30_824.0, [2, 1, 0, 0]),
    Term::new(-8_379.0, [1, 0, -1, 0]),
    Term::new(-16_675.0, [1, 1, 0, 0]),
    Term::new(-12_831.0, [2, -1, 1, 0]),
    Term::new(-10_445.0, [2, 0, 2, 0]),
    Term::new(-11_650.0, [4, 0, 0, 0]),
    Term::new(14_403.0, [2, 0, -3, 0]),
    Term::new(-7_003.0, [0, 1, -2, 0]),
    Term::new(10_056.0, [2, -1, -2, 0]),
    Term::new(6_322.0, [1, 0, 1, 0]),
    Term::new(-9_884.0, [2, -2, 0, 0]),
];

/// Periodic terms in latitude, unit 1e-6 degree
const LATITUDE_TERMS: [Term; 20] = [
    Term::new(5_128_122.0, [0, 0, 0, 1]),
    Term::new(280_602.0, [0, 0, 1, 1]),
    Term::new(277_693.0, [0, 0, 1, -1]),
    Term::new(173_237.0, [2, 0, 0, -1]),
    Term::new(55_413.0, [2, 0, -1, 1]),
    Term::new(46_271.0, [2, 0, -1, -1]),
    Term::new(32_573.0, [2, 0, 0, 1]),
    Term::new(17_198.0, [0, 0, 2, 1]),
    Term::new(9_266.0, [2, 0, 1, -1]),
    Term::new(8_822.0, [0, 0, 2, -1]),
    Term::new(8_216.0, [2, -1, 0, -1]),
    Term::new(4_324.0, [2, 0, -2, -1]),
    Term::new(4_200.0, [2, 0, 1, 1]),
    Term::new(-3_359.0, [2, 1, 0, -1]),
    Term::new(2_463.0, [2, -1, -1, 1]),
    Term::new(2_211.0, [2, -1, 0, 1]),
    Term::new(2_065.0, [2, -1, -1, -1]),
    Term::new(-1_870.0, [0, 1, -1, -1]),
    Term::new(1_828.0, [4, 0, -1, -1]),
    Term::new(-1_794.0, [0, 1, 0, 1]),
];

/// Additive longitude terms from Venus (A1), Jupiter (A2) and the Earth's
/// flattening (L' - F), over [A1, A2, L', F]
const LONGITUDE_ADDITIVE: [Term; 3] = [
    Term::new(3_958.0, [1, 0, 0, 0]),
    Term::new(1_962.0, [0, 0, 1, -1]),
    Term::new(318.0, [0, 1, 0, 0]),
];

/// Additive latitude terms over [A1, A3, L', F, M']
const LATITUDE_ADDITIVE: [PeriodicTerm<5>; 6] = [
    PeriodicTerm::new(-2_235.0, [0, 0, 1, 0, 0]),
    PeriodicTerm::new(382.0, [0, 1, 0, 0, 0]),
    PeriodicTerm::new(175.0, [1, 0, 0, -1, 0]),
    PeriodicTerm::new(175.0, [1, 0, 0, 1, 0]),
    PeriodicTerm::new(127.0, [0, 0, 1, 0, -1]),
    PeriodicTerm::new(-115.0, [0, 0, 1, 0, 1]),
];

/// Moon's mean longitude L'
pub fn mean_longitude(t: f64) -> f64 {
    218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t + t * t * t / 538_841.0
        - t * t * t * t / 65_194_000.0
}

/// Mean elongation of the Moon from the Sun, D
pub fn mean_elongation(t: f64) -> f64 {
    297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t + t * t * t / 545_868.0
        - t * t * t * t / 113_065_000.0
}

/// Sun's mean anomaly, M
pub fn solar_mean_anomaly(t: f64) -> f64 {
    357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t + t * t * t / 24_490_000.0
}

/// Moon's mean anomaly, M'
pub fn mean_anomaly(t: f64) -> f64 {
    134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t + t * t * t / 69_699.0
        - t * t * t * t / 14_712_000.0
}

/// Moon's mean distance from its ascending node (argument of latitude), F
pub fn mean_node_distance(t: f64) -> f64 {
    93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t - t * t * t / 3_526_000.0
        + t * t * t * t / 863_310_000.0
}

/// Factor for the decreasing eccentricity of the Earth's orbit
fn eccentricity_factor(t: f64) -> f64 {
    1.0 - 0.002_516 * t - 0.000_007_4 * t * t
}

/// Scale terms containing the Sun's anomaly by E^|k|
fn eccentricity_weight(e: f64) -> impl Fn(&Term) -> f64 {
    move |term| e.powi(term.multiplier(SOLAR_ANOMALY).unsigned_abs() as i32)
}

fn fundamentals(t: f64) -> [f64; 4] {
    [
        mean_elongation(t),
        solar_mean_anomaly(t),
        mean_anomaly(t),
        mean_node_distance(t),
    ]
}

/// Apparent geocentric position (nutation included), distance in AU
pub fn apparent(t: f64) -> Ecliptic {
    let args = fundamentals(t);
    let weight = eccentricity_weight(eccentricity_factor(t));

    let l_prime = mean_longitude(t);
    let f = args[3];
    let a1 = 119.75 + 131.849 * t;
    let a2 = 53.09 + 479_264.290 * t;
    let a3 = 313.45 + 481_266.484 * t;

    let longitude_args = [a1, a2, l_prime, f];
    let latitude_args = [a1, a3, l_prime, f, args[2]];

    let sigma_l = sum_sines(&LONGITUDE_TERMS, &args, t, &weight)
        + sum_sines(&LONGITUDE_ADDITIVE, &longitude_args, t, unweighted);
    let sigma_b = sum_sines(&LATITUDE_TERMS, &args, t, &weight)
        + sum_sines(&LATITUDE_ADDITIVE, &latitude_args, t, unweighted);
    let sigma_r = sum_cosines(&DISTANCE_TERMS, &args, t, &weight);

    let longitude = l_prime + sigma_l / 1e6 + nutation_in_longitude(t).to_degrees();
    let latitude = sigma_b / 1e6;
    let distance_km = MEAN_DISTANCE_KM + sigma_r / 1_000.0;

    Ecliptic::new(longitude, latitude, distance_km / AU_KM)
}

/// Geocentric distance in kilometres
pub fn distance_km(t: f64) -> f64 {
    apparent(t).distance * AU_KM
}
