//! C ABI for embedding the fishcast scorer in the dashboard shell
//!
//! The scorer itself is pure and total, so the only failure mode at this
//! boundary is a bad pointer. Functions follow the out-parameter plus
//! status-code convention; enum values cross the boundary as small integer
//! codes with static NUL-terminated name lookups.

use fishcast_core::{assess, SafetyWarning, Species, SuitabilityLabel, WeatherObservation};
use std::os::raw::c_char;
use std::ptr;

// ============================================================================
// FFI ERROR CODES
// ============================================================================

/// Success code
pub const FISHCAST_SUCCESS: i32 = 0;
/// Null pointer passed
pub const FISHCAST_NULL_POINTER: i32 = -2;

/// Maximum number of suggested species per assessment
pub const FISHCAST_MAX_SPECIES: usize = 3;

/// No safety warning
pub const FISHCAST_WARNING_NONE: i8 = -1;

// ============================================================================
// C-COMPATIBLE ASSESSMENT
// ============================================================================

/// C-compatible suitability assessment
///
/// String fields are represented as codes; resolve them with
/// [`fishcast_label_name`], [`fishcast_recommendation`],
/// [`fishcast_species_name`], and [`fishcast_warning_message`].
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FishcastAssessment {
    /// Suitability score, always in [0, 100]
    pub score: u8,
    /// Label code: 0=excellent, 1=good, 2=fair, 3=poor, 4=hazardous
    pub label: u8,
    /// Warning code: -1=none, 0=dangerous waves, 1=strong wind
    pub warning: i8,
    /// Suggested species codes; only the first `species_count` are valid
    pub species: [u8; FISHCAST_MAX_SPECIES],
    /// Number of valid entries in `species`
    pub species_count: u8,
    /// Timestamp carried through from the observation (unix seconds)
    pub observed_at: i64,
}

fn label_code(label: SuitabilityLabel) -> u8 {
    match label {
        SuitabilityLabel::Excellent => 0,
        SuitabilityLabel::Good => 1,
        SuitabilityLabel::Fair => 2,
        SuitabilityLabel::Poor => 3,
        SuitabilityLabel::Hazardous => 4,
    }
}

fn species_code(species: Species) -> u8 {
    match species {
        Species::Tuna => 0,
        Species::Sardine => 1,
        Species::JackMackerel => 2,
        Species::Hake => 3,
        Species::Cod => 4,
        Species::MahiMahi => 5,
        Species::Marlin => 6,
    }
}

fn warning_code(warning: Option<SafetyWarning>) -> i8 {
    match warning {
        None => FISHCAST_WARNING_NONE,
        Some(SafetyWarning::DangerousWaves) => 0,
        Some(SafetyWarning::StrongWind) => 1,
    }
}

// ============================================================================
// SCORING
// ============================================================================

/// Assess one marine weather observation
///
/// # Parameters
/// - `wave_height_m`: significant wave height in meters
/// - `wind_speed_kn`: sustained wind speed in knots
/// - `water_temperature_c`: sea surface temperature in °C
/// - `observed_at`: unix timestamp in seconds (passed through)
/// - `out_assessment`: pointer to receive the assessment
///
/// # Returns
/// - `FISHCAST_SUCCESS` (0) on success, with `out_assessment` filled
/// - `FISHCAST_NULL_POINTER` (-2) if `out_assessment` is null
///
/// # Safety
/// `out_assessment` must be null or a valid pointer to writable memory the
/// size of `FishcastAssessment`.
#[no_mangle]
pub unsafe extern "C" fn fishcast_assess(
    wave_height_m: f32,
    wind_speed_kn: f32,
    water_temperature_c: f32,
    observed_at: i64,
    out_assessment: *mut FishcastAssessment,
) -> i32 {
    if out_assessment.is_null() {
        return FISHCAST_NULL_POINTER;
    }

    let report = assess(&WeatherObservation::new(
        wave_height_m,
        wind_speed_kn,
        water_temperature_c,
        observed_at,
    ));

    let mut species = [0u8; FISHCAST_MAX_SPECIES];
    let species_count = report.suggested_species.len().min(FISHCAST_MAX_SPECIES);
    for (slot, suggestion) in species
        .iter_mut()
        .zip(report.suggested_species.iter().take(species_count))
    {
        *slot = species_code(*suggestion);
    }

    out_assessment.write(FishcastAssessment {
        score: report.score,
        label: label_code(report.label),
        warning: warning_code(report.safety_warning),
        species,
        species_count: species_count as u8,
        observed_at: report.observed_at,
    });

    FISHCAST_SUCCESS
}

// ============================================================================
// NAME LOOKUPS
// ============================================================================

/// Get the static NUL-terminated name for a label code, or null if the code
/// is unknown
#[no_mangle]
pub extern "C" fn fishcast_label_name(label: u8) -> *const c_char {
    match label {
        0 => c"excellent".as_ptr(),
        1 => c"good".as_ptr(),
        2 => c"fair".as_ptr(),
        3 => c"poor".as_ptr(),
        4 => c"hazardous".as_ptr(),
        _ => ptr::null(),
    }
}

/// Get the static NUL-terminated recommendation for a label code, or null if
/// the code is unknown
#[no_mangle]
pub extern "C" fn fishcast_recommendation(label: u8) -> *const c_char {
    match label {
        0 => c"ideal conditions, plan a full day on the water".as_ptr(),
        1 => c"favorable conditions for most fishing activities".as_ptr(),
        2 => c"usable conditions, stay alert for changes".as_ptr(),
        3 => c"difficult conditions, short trips close to port only".as_ptr(),
        4 => c"do not depart, wait for conditions to improve".as_ptr(),
        _ => ptr::null(),
    }
}

/// Get the static NUL-terminated name for a species code, or null if the
/// code is unknown
#[no_mangle]
pub extern "C" fn fishcast_species_name(species: u8) -> *const c_char {
    match species {
        0 => c"tuna".as_ptr(),
        1 => c"sardine".as_ptr(),
        2 => c"jack mackerel".as_ptr(),
        3 => c"hake".as_ptr(),
        4 => c"cod".as_ptr(),
        5 => c"mahi-mahi".as_ptr(),
        6 => c"marlin".as_ptr(),
        _ => ptr::null(),
    }
}

/// Get the static NUL-terminated message for a warning code, or null for
/// `FISHCAST_WARNING_NONE` and unknown codes
#[no_mangle]
pub extern "C" fn fishcast_warning_message(warning: i8) -> *const c_char {
    match warning {
        0 => c"dangerous waves: return to port".as_ptr(),
        1 => c"strong wind: caution during maneuvers".as_ptr(),
        _ => ptr::null(),
    }
}
