//! Seed records for the internal hospital directory.
//!
//! A small set of well-known Klang Valley facilities so the finder works
//! out of the box when the external places source is unconfigured or
//! unreachable.

use carefind_core::{Coordinate, HospitalRecord, HospitalType};

#[allow(clippy::too_many_arguments)]
fn hospital(
    id: &str,
    name: &str,
    hospital_type: HospitalType,
    address: &str,
    city: &str,
    state: &str,
    postal_code: &str,
    lat: f64,
    lng: f64,
    phone: &str,
    has_emergency: bool,
    specialties: &[&str],
    rating: f64,
) -> HospitalRecord {
    HospitalRecord {
        id: format!("internal:{id}"),
        name: name.to_owned(),
        hospital_type,
        address: address.to_owned(),
        city: city.to_owned(),
        state: state.to_owned(),
        postal_code: postal_code.to_owned(),
        coordinate: Coordinate::new(lat, lng),
        phone_number: Some(phone.to_owned()),
        emergency_number: has_emergency.then(|| "999".to_owned()),
        website: None,
        email: None,
        operating_hours: has_emergency.then(|| "24 hours".to_owned()),
        is_24_hours: has_emergency,
        has_emergency,
        specialties: specialties.iter().map(|s| (*s).to_owned()).collect(),
        facilities: vec![],
        rating: Some(rating),
    }
}

/// The seeded Malaysian hospital set.
#[must_use]
pub fn seeded_hospitals() -> Vec<HospitalRecord> {
    vec![
        hospital(
            "hkl",
            "Hospital Kuala Lumpur",
            HospitalType::Government,
            "Jalan Pahang",
            "Kuala Lumpur",
            "Wilayah Persekutuan",
            "50586",
            3.1724,
            101.7022,
            "+60326155555",
            true,
            &["Trauma", "Cardiology", "Neurology"],
            4.0,
        ),
        hospital(
            "gleneagles-kl",
            "Gleneagles Hospital Kuala Lumpur",
            HospitalType::Private,
            "286 Jalan Ampang",
            "Kuala Lumpur",
            "Wilayah Persekutuan",
            "50450",
            3.1612,
            101.7313,
            "+60341413000",
            true,
            &["Oncology", "Orthopaedics", "Cardiology"],
            4.3,
        ),
        hospital(
            "pantai-kl",
            "Pantai Hospital Kuala Lumpur",
            HospitalType::Private,
            "8 Jalan Bukit Pantai",
            "Kuala Lumpur",
            "Wilayah Persekutuan",
            "59100",
            3.1166,
            101.6679,
            "+60322960888",
            true,
            &["Obstetrics", "Paediatrics"],
            4.1,
        ),
        hospital(
            "prince-court",
            "Prince Court Medical Centre",
            HospitalType::Private,
            "39 Jalan Kia Peng",
            "Kuala Lumpur",
            "Wilayah Persekutuan",
            "50450",
            3.1516,
            101.7181,
            "+60321600000",
            true,
            &["Fertility", "Gastroenterology"],
            4.5,
        ),
        hospital(
            "tung-shin",
            "Tung Shin Hospital",
            HospitalType::Private,
            "102 Jalan Pudu",
            "Kuala Lumpur",
            "Wilayah Persekutuan",
            "55100",
            3.1437,
            101.7041,
            "+60320372288",
            false,
            &["Traditional Medicine", "General Surgery"],
            3.9,
        ),
        hospital(
            "kk-tanglin",
            "Klinik Kesihatan Tanglin",
            HospitalType::Clinic,
            "Jalan Cenderasari",
            "Kuala Lumpur",
            "Wilayah Persekutuan",
            "50480",
            3.1419,
            101.6865,
            "+60326980810",
            false,
            &["Primary Care"],
            3.7,
        ),
        hospital(
            "ijn",
            "Institut Jantung Negara",
            HospitalType::Specialist,
            "145 Jalan Tun Razak",
            "Kuala Lumpur",
            "Wilayah Persekutuan",
            "50400",
            3.1663,
            101.7186,
            "+60326178200",
            true,
            &["Cardiology", "Cardiothoracic Surgery"],
            4.6,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique() {
        let records = seeded_hospitals();
        let mut ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn seed_includes_emergency_capable_government_hospital() {
        let records = seeded_hospitals();
        assert!(records.iter().any(|r| {
            r.hospital_type == HospitalType::Government && r.has_emergency && r.is_24_hours
        }));
    }
}
