// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]


use std::cell::RefCell;

use angkut::{NotificationKind, Notifier, NotifyError};
use angkut_domain::{Coordinate, DaysOff, FleetStatus, RequestStatus, ScheduleStop};
use chrono::{Datelike, NaiveDate, Weekday};
use serde_json::Value;

use crate::{NewFleet, NewOfficer, NewRegion, NewRequest, NewSchedule, NewSubArea, Persistence};

/// The request location most tests assign around.
pub(crate) const REQUEST_LAT: f64 = -7.34;
pub(crate) const REQUEST_LON: f64 = 108.11;

/// Monday, used as the target date in most tests.
pub(crate) fn monday() -> NaiveDate {
    let date: NaiveDate = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
    assert_eq!(date.weekday(), Weekday::Mon);
    date
}

pub(crate) fn coord(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate::new(latitude, longitude).unwrap()
}

pub(crate) fn setup() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub(crate) fn count_rows(db: &Persistence, table: &str) -> i64 {
    db.conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
        .unwrap()
}

pub(crate) fn seed_region(db: &Persistence, anchor: Option<Coordinate>) -> i64 {
    db.insert_region(&NewRegion {
        name: String::from("Cihideung"),
        sub_district: String::from("Cihideung"),
        anchor,
        is_active: true,
    })
    .unwrap()
}

pub(crate) fn seed_sub_area(
    db: &Persistence,
    region_id: i64,
    coordinate: Option<Coordinate>,
) -> i64 {
    db.insert_sub_area(&NewSubArea {
        region_id,
        name: String::from("Kampung Babakan"),
        coordinate,
        route_order: 1,
    })
    .unwrap()
}

pub(crate) fn seed_officer(
    db: &Persistence,
    user_id: i64,
    region_id: Option<i64>,
    is_available: bool,
    days_off: &[u8],
) -> i64 {
    db.insert_officer(&NewOfficer {
        user_id,
        name: format!("Petugas {user_id}"),
        region_id,
        is_available,
        days_off: DaysOff::from_iso_numbers(days_off).unwrap(),
    })
    .unwrap()
}

pub(crate) fn seed_fleet(
    db: &Persistence,
    plate: &str,
    region_id: Option<i64>,
    leader_officer_id: Option<i64>,
) -> i64 {
    db.insert_fleet(&NewFleet {
        plate_number: plate.to_string(),
        capacity_kg: 2500,
        status: FleetStatus::Active,
        region_id,
        leader_officer_id,
    })
    .unwrap()
}

pub(crate) fn seed_schedule(
    db: &mut Persistence,
    fleet_id: i64,
    weekday: Weekday,
    stop_ids: &[i64],
) -> i64 {
    let stops: Vec<ScheduleStop> = stop_ids
        .iter()
        .enumerate()
        .map(|(index, sub_area_id)| ScheduleStop {
            sub_area_id: *sub_area_id,
            route_order: i32::try_from(index).unwrap() + 1,
        })
        .collect();

    db.insert_schedule(&NewSchedule {
        fleet_id,
        weekday,
        stops,
    })
    .unwrap()
}

pub(crate) fn seed_request(
    db: &Persistence,
    status: RequestStatus,
    location: Option<Coordinate>,
) -> i64 {
    db.insert_request(&NewRequest {
        user_id: Some(500),
        guest_name: None,
        guest_phone: None,
        guest_email: None,
        region_id: None,
        sub_area_id: None,
        address: String::from("Jl. Siliwangi No. 12"),
        location,
        estimated_volume_kg: Some(40),
        photo_path: None,
        status,
    })
    .unwrap()
}

/// Ids of interest in a seeded single-fleet world.
pub(crate) struct SingleFleetWorld {
    pub officer_id: i64,
    pub officer_user_id: i64,
    pub fleet_id: i64,
}

/// One region, one officer, one active fleet with a Monday route whose
/// only stop sits roughly 1.1 km from the standard request location.
pub(crate) fn seed_single_fleet_world(db: &mut Persistence, days_off: &[u8]) -> SingleFleetWorld {
    let region_id: i64 = seed_region(db, None);
    let stop_id: i64 = seed_sub_area(db, region_id, Some(coord(-7.35, 108.11)));
    let officer_id: i64 = seed_officer(db, 101, Some(region_id), true, days_off);
    let fleet_id: i64 = seed_fleet(db, "Z 1 KA", Some(region_id), Some(officer_id));
    seed_schedule(db, fleet_id, Weekday::Mon, &[stop_id]);

    SingleFleetWorld {
        officer_id,
        officer_user_id: 101,
        fleet_id,
    }
}

/// Ids of interest in a seeded two-fleet world.
pub(crate) struct TwoFleetWorld {
    pub far_officer_id: i64,
    pub near_officer_id: i64,
    pub far_fleet_id: i64,
    pub near_fleet_id: i64,
}

/// Two active fleets on the Monday route: one anchored roughly 5 km
/// from the standard request location, one roughly 1 km.
pub(crate) fn seed_two_fleet_world(db: &mut Persistence) -> TwoFleetWorld {
    let region_id: i64 = seed_region(db, None);

    let far_stop: i64 = seed_sub_area(db, region_id, Some(coord(-7.385, 108.11)));
    let near_stop: i64 = seed_sub_area(db, region_id, Some(coord(-7.349, 108.11)));

    let far_officer_id: i64 = seed_officer(db, 101, Some(region_id), true, &[]);
    let near_officer_id: i64 = seed_officer(db, 102, Some(region_id), true, &[]);

    let far_fleet_id: i64 = seed_fleet(db, "Z 1 KA", Some(region_id), Some(far_officer_id));
    let near_fleet_id: i64 = seed_fleet(db, "Z 2 KA", Some(region_id), Some(near_officer_id));

    seed_schedule(db, far_fleet_id, Weekday::Mon, &[far_stop]);
    seed_schedule(db, near_fleet_id, Weekday::Mon, &[near_stop]);

    TwoFleetWorld {
        far_officer_id,
        near_officer_id,
        far_fleet_id,
        near_fleet_id,
    }
}

/// A notifier that records every call.
#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    pub calls: RefCell<Vec<(i64, NotificationKind, Value)>>,
}

impl Notifier for RecordingNotifier {
    fn notify(
        &self,
        officer_user_id: i64,
        kind: NotificationKind,
        payload: &Value,
    ) -> Result<(), NotifyError> {
        self.calls
            .borrow_mut()
            .push((officer_user_id, kind, payload.clone()));
        Ok(())
    }
}

/// A notifier whose backend always refuses delivery.
#[derive(Debug, Default)]
pub(crate) struct FailingNotifier;

impl Notifier for FailingNotifier {
    fn notify(
        &self,
        _officer_user_id: i64,
        _kind: NotificationKind,
        _payload: &Value,
    ) -> Result<(), NotifyError> {
        Err(NotifyError::DeliveryFailed(String::from(
            "backend unavailable",
        )))
    }
}
