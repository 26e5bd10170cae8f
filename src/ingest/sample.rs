//! Embedded sample dataset
//!
//! A small fictional incident set covering several weeks, used when no
//! dataset file is supplied so the CLI works out of the box.

use crate::store::CrimeRecord;

const SAMPLE: &[(u32, &str, &str, &str, &str, &str)] = &[
    (1, "2024-01-15", "14:30", "Theft", "Downtown", "Shoplifting incident at retail store on Main Street"),
    (2, "2024-01-15", "22:15", "Burglary", "Residential Area", "Break-in at apartment complex on Oak Avenue"),
    (3, "2024-01-16", "08:45", "Vandalism", "Park District", "Graffiti on public property at Central Park"),
    (4, "2024-01-16", "19:20", "Theft", "Downtown", "Purse snatching incident near bus station"),
    (5, "2024-01-17", "03:10", "Burglary", "Residential Area", "Residential break-in on Elm Street"),
    (6, "2024-01-17", "16:55", "Assault", "Commercial Zone", "Physical altercation outside office building"),
    (7, "2024-01-18", "11:30", "Theft", "Shopping Center", "Vehicle theft from parking lot at mall"),
    (8, "2024-01-18", "23:45", "Burglary", "Residential Area", "Home invasion attempt on Pine Street"),
    (9, "2024-01-19", "07:20", "Vandalism", "Park District", "Property damage at playground equipment"),
    (10, "2024-01-19", "18:30", "Theft", "Downtown", "Bicycle theft near metro station"),
    (11, "2024-01-20", "12:15", "Assault", "Commercial Zone", "Workplace violence incident"),
    (12, "2024-01-20", "21:40", "Theft", "Shopping Center", "Shoplifting at electronics store"),
    (13, "2024-01-21", "04:25", "Burglary", "Residential Area", "Break-in at single family home"),
    (14, "2024-01-21", "15:10", "Vandalism", "Park District", "Damage to park benches and signs"),
    (15, "2024-01-22", "09:35", "Theft", "Downtown", "Wallet theft in crowded area"),
    (16, "2024-01-22", "20:50", "Assault", "Commercial Zone", "Bar fight escalation"),
    (17, "2024-01-23", "06:45", "Burglary", "Residential Area", "Garage break-in on Maple Drive"),
    (18, "2024-01-23", "17:20", "Theft", "Shopping Center", "Purse theft in department store"),
    (19, "2024-01-24", "13:55", "Vandalism", "Park District", "Spray paint on public restrooms"),
    (20, "2024-01-24", "22:30", "Theft", "Downtown", "Phone theft on public transport"),
    (21, "2024-01-25", "10:15", "Assault", "Commercial Zone", "Road rage incident in parking lot"),
    (22, "2024-01-25", "19:40", "Burglary", "Residential Area", "Apartment burglary on Cedar Street"),
    (23, "2024-01-26", "05:50", "Theft", "Shopping Center", "Car break-in at shopping plaza"),
    (24, "2024-01-26", "14:25", "Vandalism", "Park District", "Broken windows at community center"),
    (25, "2024-01-27", "08:10", "Assault", "Commercial Zone", "Altercation at restaurant"),
    (26, "2024-01-27", "21:15", "Theft", "Downtown", "Laptop theft from coffee shop"),
    (27, "2024-01-28", "12:40", "Burglary", "Residential Area", "House break-in during daytime"),
    (28, "2024-01-28", "18:55", "Vandalism", "Park District", "Damage to sports equipment"),
    (29, "2024-01-29", "07:30", "Theft", "Shopping Center", "Package theft from delivery area"),
    (30, "2024-01-29", "23:20", "Assault", "Commercial Zone", "Late night altercation"),
    (31, "2024-01-30", "11:45", "Burglary", "Residential Area", "Attempted break-in at townhouse"),
    (32, "2024-01-30", "16:10", "Theft", "Downtown", "Credit card theft and fraud"),
    (33, "2024-01-31", "09:25", "Vandalism", "Park District", "Graffiti on memorial statue"),
    (34, "2024-01-31", "20:35", "Assault", "Commercial Zone", "Dispute outside nightclub"),
    (35, "2024-02-01", "06:15", "Theft", "Shopping Center", "Early morning store break-in"),
    (36, "2024-02-01", "15:50", "Burglary", "Residential Area", "Condo break-in on Birch Lane"),
    (37, "2024-02-02", "12:30", "Vandalism", "Park District", "Damage to picnic tables"),
    (38, "2024-02-02", "19:45", "Theft", "Downtown", "Jewelry theft from display case"),
    (39, "2024-02-03", "08:20", "Assault", "Commercial Zone", "Customer service dispute escalation"),
    (40, "2024-02-03", "22:10", "Burglary", "Residential Area", "Late night break-in attempt"),
];

/// The embedded sample dataset as parsed records.
pub fn sample_records() -> Vec<CrimeRecord> {
    SAMPLE
        .iter()
        .map(|&(id, date, time, kind, location, description)| {
            CrimeRecord::parse(id, date, time, kind, location, description)
                .expect("embedded sample dataset is valid")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;

    #[test]
    fn test_sample_loads_cleanly() {
        let records = sample_records();
        assert_eq!(records.len(), 40);

        // Passes full store validation, including unique ids
        let store = RecordStore::from_records(records).unwrap();
        let (first, last) = store.date_range().unwrap();
        assert_eq!(first.to_string(), "2024-01-15");
        assert_eq!(last.to_string(), "2024-02-03");
    }
}
