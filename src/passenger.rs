use crate::error::ModelError;
use crate::time;
use chrono::NaiveDate;
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;

pub type Passport = Arc<str>;

#[derive(Debug, Clone)]
pub struct Passenger {
    passport: Passport,
    name: String,
    surname: String,
    patronymic: String,
    date_of_birth: NaiveDate,
    // Audit log of every flight the passenger was ever booked on. Roster
    // removals and cancellations never retract entries.
    booked_flights: Vec<String>,
}

impl Passenger {
    pub fn new(
        passport: &str,
        name: &str,
        surname: &str,
        patronymic: &str,
        date_of_birth: &str,
    ) -> Result<Passenger, ModelError> {
        if passport.trim().is_empty() {
            return Err(ModelError::Empty("passport"));
        }
        Ok(Passenger {
            passport: Arc::from(passport.trim()),
            name: name.to_string(),
            surname: surname.to_string(),
            patronymic: patronymic.to_string(),
            date_of_birth: time::parse_date(date_of_birth)?,
            booked_flights: Vec::new(),
        })
    }

    pub fn passport(&self) -> &Passport {
        &self.passport
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn patronymic(&self) -> &str {
        &self.patronymic
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.surname, self.name, self.patronymic)
    }

    pub fn age(&self) -> i32 {
        self.age_on(time::today())
    }

    pub fn age_on(&self, date: NaiveDate) -> i32 {
        time::years_between(self.date_of_birth, date)
    }

    pub fn book_flight(&mut self, flight_number: &str) {
        self.booked_flights.push(flight_number.to_string());
    }

    pub fn booked_flights(&self) -> Vec<String> {
        self.booked_flights.clone()
    }
}

impl PartialEq for Passenger {
    fn eq(&self, other: &Self) -> bool {
        self.passport == other.passport
    }
}

impl Eq for Passenger {}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Passport: {})", self.full_name(), self.passport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ivan() -> Passenger {
        Passenger::new("AB123456", "Ivan", "Petrov", "Ivanovich", "1985-05-15").unwrap()
    }

    #[test]
    fn test_passenger_creation() {
        let passenger = ivan();
        assert_eq!(&**passenger.passport(), "AB123456");
        assert_eq!(passenger.name(), "Ivan");
        assert_eq!(passenger.full_name(), "Petrov Ivan Ivanovich");
        assert_eq!(passenger.to_string(), "Petrov Ivan Ivanovich (Passport: AB123456)");
    }

    #[test]
    fn test_booking_history_is_append_only() {
        let mut passenger = ivan();
        passenger.book_flight("SU-1001");
        passenger.book_flight("SU-1001");
        assert_eq!(passenger.booked_flights(), vec!["SU-1001", "SU-1001"]);
    }

    #[test]
    fn test_booked_flights_is_a_snapshot() {
        let mut passenger = ivan();
        passenger.book_flight("SU-1001");
        let mut snapshot = passenger.booked_flights();
        snapshot.push("SU-9999".to_string());
        snapshot.clear();
        assert_eq!(passenger.booked_flights(), vec!["SU-1001"]);
    }

    #[test]
    fn test_age_on_reference_dates() {
        let passenger = ivan();
        let day_before = NaiveDate::from_ymd_opt(2025, 5, 14).unwrap();
        let birthday = NaiveDate::from_ymd_opt(2025, 5, 15).unwrap();
        let later = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        assert_eq!(passenger.age_on(day_before), 39);
        assert_eq!(passenger.age_on(birthday), 40);
        assert_eq!(passenger.age_on(later), 40);
    }

    #[test]
    fn test_equality_by_passport() {
        let a = ivan();
        let b = Passenger::new("AB123456", "Someone", "Else", "", "1990-01-01").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_birth_date() {
        let err = Passenger::new("AB1", "Ivan", "Petrov", "Ivanovich", "15/05/1985").unwrap_err();
        assert_eq!(err, ModelError::InvalidDate("15/05/1985".to_string()));
    }
}
