use crate::constants::Megaton;

/// Map an impact probability and energy onto a coarse Torino-like class.
///
/// Fixed, ordered threshold table; the first matching row wins. All comparisons are
/// strict, so `probability = 1e-3` falls through to the next row, and `probability >= 1`
/// is class 10 regardless of energy. Classes 7 and 9 are unreachable: the table is a
/// coarse approximation of the official discrete scale.
///
/// Arguments
/// ---------
/// * `probability`: impact probability in [0, 1]
/// * `energy_mt`: impact energy in megatons TNT
///
/// Return
/// ------
/// * Class in {0, 1, 2, 3, 4, 5, 6, 8, 10}
pub fn approximate_torino(probability: f64, energy_mt: Megaton) -> u8 {
    if probability < 1e-6 || energy_mt < 1.0 {
        return 0;
    }
    if probability < 1e-5 && energy_mt < 10.0 {
        return 0;
    }
    if probability < 1e-4 {
        return 1;
    }
    if probability < 1e-3 {
        return if energy_mt < 100.0 { 2 } else { 3 };
    }
    if probability < 1e-2 {
        return 4;
    }
    if probability < 0.1 {
        return 5;
    }
    if probability < 1.0 {
        return if energy_mt < 1000.0 { 6 } else { 8 };
    }
    10
}
