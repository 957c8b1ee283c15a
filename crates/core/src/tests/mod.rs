// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod plan_tests;

use crate::candidate::ScheduleRow;
use angkut_domain::{
    Coordinate, DaysOff, Fleet, FleetStatus, Officer, PickupRequest, RequestStatus, SubArea,
};
use chrono::{Datelike, NaiveDate};

/// Monday, used as the target date in most tests.
pub(crate) fn monday() -> NaiveDate {
    let date: NaiveDate = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
    assert_eq!(date.weekday(), chrono::Weekday::Mon);
    date
}

pub(crate) fn coord(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate::new(latitude, longitude).unwrap()
}

pub(crate) fn make_officer(id: i64, is_available: bool, days_off: &[u8]) -> Officer {
    Officer {
        id,
        user_id: id + 100,
        name: format!("Petugas {id}"),
        region_id: Some(1),
        is_available,
        days_off: DaysOff::from_iso_numbers(days_off).unwrap(),
    }
}

pub(crate) fn make_fleet(id: i64, status: FleetStatus, leader_officer_id: Option<i64>) -> Fleet {
    Fleet {
        id,
        plate_number: format!("Z {id} KA"),
        capacity_kg: 2500,
        status,
        region_id: Some(1),
        leader_officer_id,
    }
}

pub(crate) fn make_stop(id: i64, coordinate: Option<Coordinate>) -> SubArea {
    SubArea {
        id,
        region_id: 1,
        name: format!("Kampung {id}"),
        coordinate,
        route_order: 1,
    }
}

pub(crate) fn make_row(
    schedule_id: i64,
    fleet: Fleet,
    leader: Option<Officer>,
    stops: Vec<SubArea>,
    region_anchor: Option<Coordinate>,
) -> ScheduleRow {
    ScheduleRow {
        schedule_id,
        fleet,
        leader,
        stops,
        region_anchor,
    }
}

pub(crate) fn make_request(
    id: i64,
    status: RequestStatus,
    location: Option<Coordinate>,
) -> PickupRequest {
    PickupRequest {
        id,
        user_id: Some(500),
        guest_name: None,
        guest_phone: None,
        guest_email: None,
        region_id: Some(1),
        sub_area_id: None,
        address: String::from("Jl. Siliwangi No. 12"),
        location,
        estimated_volume_kg: Some(40),
        photo_path: None,
        status,
    }
}
