use temperament::{TuningParameter, TuningSystem, TuningTable};

/// Formats a tuning table as a Scala `.scl` scale file.
///
/// Degrees are listed from the pitch class after the tonic, closing with the
/// octave. Ratio-tuned degrees are written as `n/d`, cents-tuned degrees as
/// decimals (Scala reads any value containing a period as cents).
pub fn format_scl(system: TuningSystem, table: &TuningTable) -> String {
    let mut ret = String::new();
    ret.push_str(&format!("! {}.scl\n", system));
    ret.push_str("!\n");
    ret.push_str(&format!("{}, tonic {}\n", system.description(), table.tonic()));
    ret.push_str(" 12\n");
    ret.push_str("!\n");

    for (pitch_class, parameter) in table.iter() {
        if pitch_class == table.tonic() {
            continue;
        }
        ret.push_str(&format!(" {}\n", format_degree(parameter)));
    }
    ret.push_str(" 2/1\n");

    ret
}

fn format_degree(parameter: &TuningParameter) -> String {
    if parameter.ratio.is_unison() {
        format!("{:.5}", parameter.cents)
    } else {
        parameter.ratio.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temperament::generate_tuning_table;

    #[test]
    fn test_ratio_scale() {
        let scl = format_scl(TuningSystem::Centaur, &generate_tuning_table(TuningSystem::Centaur));
        let lines: Vec<&str> = scl.lines().collect();
        assert_eq!(lines[0], "! centaur.scl");
        assert_eq!(lines[2], "Centaur (7-limit), tonic C");
        assert_eq!(lines[3].trim(), "12");
        assert_eq!(lines[5].trim(), "21/20");
        assert_eq!(lines[14].trim(), "7/4");
        assert_eq!(lines.last().map(|l| l.trim()), Some("2/1"));
        assert_eq!(lines.len(), 5 + 12);
    }

    #[test]
    fn test_cents_scale() {
        let scl = format_scl(TuningSystem::Equal, &generate_tuning_table(TuningSystem::Equal));
        let degrees: Vec<&str> = scl.lines().skip(5).map(str::trim).collect();
        assert_eq!(degrees[0], "100.00000");
        assert_eq!(degrees[10], "1100.00000");
        assert_eq!(degrees[11], "2/1");
    }
}
