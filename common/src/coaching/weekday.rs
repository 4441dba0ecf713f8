use std::fmt;

/// Day a routine task is scheduled on. Routines start on Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const WEEK: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Day for the `index`-th session of a routine. Wraps around after Sunday.
    pub fn nth(index: usize) -> Self {
        Self::WEEK[index % Self::WEEK.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Lunes",
            Weekday::Tuesday => "Martes",
            Weekday::Wednesday => "Miércoles",
            Weekday::Thursday => "Jueves",
            Weekday::Friday => "Viernes",
            Weekday::Saturday => "Sábado",
            Weekday::Sunday => "Domingo",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_starts_on_lunes() {
        let labels: Vec<&str> = Weekday::WEEK.iter().map(|d| d.label()).collect();
        assert_eq!(
            labels,
            ["Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado", "Domingo"]
        );
    }

    #[test]
    fn nth_wraps_after_sunday() {
        assert_eq!(Weekday::nth(0), Weekday::Monday);
        assert_eq!(Weekday::nth(6), Weekday::Sunday);
        assert_eq!(Weekday::nth(7), Weekday::Monday);
        assert_eq!(Weekday::nth(16), Weekday::Wednesday);
    }
}
