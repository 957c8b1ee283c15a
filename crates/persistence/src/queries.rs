// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use angkut::ScheduleRow;
use angkut_audit::RefType;
use angkut_domain::{
    Assignment, AssignmentStatus, Coordinate, DaysOff, Fleet, FleetStatus, Officer, PickupRequest,
    RequestStatus, SubArea, iso_number,
};
use chrono::{NaiveDateTime, Weekday};
use rusqlite::{Connection, OptionalExtension, params};

use crate::data_models::StatusHistoryRecord;
use crate::error::PersistenceError;

/// Builds a coordinate from a pair of nullable columns.
///
/// Both columns present yields a validated coordinate; either missing
/// yields `None`.
fn coordinate_from_columns(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<Option<Coordinate>, PersistenceError> {
    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Coordinate::new(latitude, longitude)
            .map(Some)
            .map_err(|err| PersistenceError::InvalidStoredValue(err.to_string())),
        _ => Ok(None),
    }
}

fn parse_status<T>(raw: &str) -> Result<T, PersistenceError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|err| PersistenceError::InvalidStoredValue(err.to_string()))
}

fn parse_datetime(raw: &str) -> Result<NaiveDateTime, PersistenceError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map_err(|err| PersistenceError::InvalidStoredValue(err.to_string()))
}

/// Fetches a pickup request by id.
///
/// # Errors
///
/// Returns `RequestNotFound` if no row exists, or an error if the query
/// or decoding fails.
pub fn request_by_id(conn: &Connection, request_id: i64) -> Result<PickupRequest, PersistenceError> {
    type RequestColumns = (
        i64,
        Option<i64>,
        Option<String>,
        Option<String>,
        Option<String>,
        Option<i64>,
        Option<i64>,
        String,
        Option<f64>,
        Option<f64>,
        Option<i64>,
        Option<String>,
        String,
    );

    let row: Option<RequestColumns> = conn
        .query_row(
            "SELECT id, user_id, nama_tamu, telepon_tamu, email_tamu,
                    wilayah_id, kampung_id, alamat, latitude, longitude,
                    estimasi_berat_kg, foto_path, status
             FROM pengajuan WHERE id = ?1",
            params![request_id],
            |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                    row.get(6)?,
                    row.get(7)?,
                    row.get(8)?,
                    row.get(9)?,
                    row.get(10)?,
                    row.get(11)?,
                    row.get(12)?,
                ))
            },
        )
        .optional()?;

    let Some(columns) = row else {
        return Err(PersistenceError::RequestNotFound(request_id));
    };

    let status: RequestStatus = parse_status(&columns.12)?;
    let location: Option<Coordinate> = coordinate_from_columns(columns.8, columns.9)?;

    Ok(PickupRequest {
        id: columns.0,
        user_id: columns.1,
        guest_name: columns.2,
        guest_phone: columns.3,
        guest_email: columns.4,
        region_id: columns.5,
        sub_area_id: columns.6,
        address: columns.7,
        location,
        estimated_volume_kg: columns.10,
        photo_path: columns.11,
        status,
    })
}

/// Fetches an officer by id.
///
/// # Errors
///
/// Returns an error if the query fails or the stored days-off list is
/// malformed.
pub fn officer_by_id(conn: &Connection, officer_id: i64) -> Result<Officer, PersistenceError> {
    let (id, user_id, name, region_id, is_available, days_off_json): (
        i64,
        i64,
        String,
        Option<i64>,
        bool,
        String,
    ) = conn.query_row(
        "SELECT id, user_id, nama, wilayah_id, is_available, hari_libur_json
         FROM petugas WHERE id = ?1",
        params![officer_id],
        |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        },
    )?;

    let iso_numbers: Vec<u8> = serde_json::from_str(&days_off_json)?;
    let days_off: DaysOff = DaysOff::from_iso_numbers(&iso_numbers)
        .map_err(|err| PersistenceError::InvalidStoredValue(err.to_string()))?;

    Ok(Officer {
        id,
        user_id,
        name,
        region_id,
        is_available,
        days_off,
    })
}

/// Loads the schedule rows for a weekday, with the fleet, its leader
/// officer, the ordered stops, and the region anchor joined in.
///
/// # Errors
///
/// Returns an error if the query or decoding fails.
pub fn schedule_rows_for_weekday(
    conn: &Connection,
    weekday: Weekday,
) -> Result<Vec<ScheduleRow>, PersistenceError> {
    type FleetColumns = (
        i64,
        i64,
        String,
        i64,
        String,
        Option<i64>,
        Option<i64>,
        Option<f64>,
        Option<f64>,
    );

    let mut stmt = conn.prepare(
        "SELECT j.id, a.id, a.nomor_polisi, a.kapasitas_kg, a.status,
                a.wilayah_id, a.ketua_petugas_id, w.latitude, w.longitude
         FROM jadwal_rutin j
         JOIN armada a ON a.id = j.armada_id
         LEFT JOIN wilayah w ON w.id = a.wilayah_id
         WHERE j.hari = ?1
         ORDER BY j.id",
    )?;

    let raw_rows: Vec<FleetColumns> = stmt
        .query_map(params![i64::from(iso_number(weekday))], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
                row.get(7)?,
                row.get(8)?,
            ))
        })?
        .collect::<Result<Vec<FleetColumns>, rusqlite::Error>>()?;

    let mut rows: Vec<ScheduleRow> = Vec::with_capacity(raw_rows.len());
    for columns in raw_rows {
        let status: FleetStatus = parse_status(&columns.4)?;
        let fleet: Fleet = Fleet {
            id: columns.1,
            plate_number: columns.2,
            capacity_kg: columns.3,
            status,
            region_id: columns.5,
            leader_officer_id: columns.6,
        };

        let leader: Option<Officer> = match columns.6 {
            Some(officer_id) => Some(officer_by_id(conn, officer_id)?),
            None => None,
        };

        let stops: Vec<SubArea> = stops_for_schedule(conn, columns.0)?;
        let region_anchor: Option<Coordinate> = coordinate_from_columns(columns.7, columns.8)?;

        rows.push(ScheduleRow {
            schedule_id: columns.0,
            fleet,
            leader,
            stops,
            region_anchor,
        });
    }

    Ok(rows)
}

/// Loads the ordered stops for a routine schedule.
fn stops_for_schedule(
    conn: &Connection,
    schedule_id: i64,
) -> Result<Vec<SubArea>, PersistenceError> {
    type StopColumns = (i64, i64, String, Option<f64>, Option<f64>, i32);

    let mut stmt = conn.prepare(
        "SELECT k.id, k.wilayah_id, k.nama, k.latitude, k.longitude, jk.urutan
         FROM jadwal_rutin_kampung jk
         JOIN kampung k ON k.id = jk.kampung_id
         WHERE jk.jadwal_id = ?1
         ORDER BY jk.urutan",
    )?;

    let raw_stops: Vec<StopColumns> = stmt
        .query_map(params![schedule_id], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })?
        .collect::<Result<Vec<StopColumns>, rusqlite::Error>>()?;

    let mut stops: Vec<SubArea> = Vec::with_capacity(raw_stops.len());
    for (id, region_id, name, latitude, longitude, route_order) in raw_stops {
        stops.push(SubArea {
            id,
            region_id,
            name,
            coordinate: coordinate_from_columns(latitude, longitude)?,
            route_order,
        });
    }

    Ok(stops)
}

type AssignmentColumns = (
    i64,
    i64,
    i64,
    Option<i64>,
    String,
    String,
    Option<String>,
    Option<i64>,
);

fn assignment_from_columns(columns: AssignmentColumns) -> Result<Assignment, PersistenceError> {
    let status: AssignmentStatus = parse_status(&columns.5)?;
    Ok(Assignment {
        id: columns.0,
        request_id: columns.1,
        officer_id: columns.2,
        fleet_id: columns.3,
        scheduled_at: parse_datetime(&columns.4)?,
        status,
        note: columns.6,
        collected_kg: columns.7,
    })
}

/// Fetches an assignment by id.
///
/// # Errors
///
/// Returns `AssignmentNotFound` if no row exists, or an error if the
/// query or decoding fails.
pub fn assignment_by_id(
    conn: &Connection,
    assignment_id: i64,
) -> Result<Assignment, PersistenceError> {
    let row = conn
        .query_row(
            "SELECT id, pengajuan_id, petugas_id, armada_id, jadwal_angkut,
                    status, catatan, berat_terangkut_kg
             FROM penugasan WHERE id = ?1",
            params![assignment_id],
            |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                    row.get(6)?,
                    row.get(7)?,
                ))
            },
        )
        .optional()?;

    let Some(columns) = row else {
        return Err(PersistenceError::AssignmentNotFound(assignment_id));
    };

    assignment_from_columns(columns)
}

/// Fetches the current (active) assignment for a request, if any.
///
/// At most one assignment per request is active at a time; older
/// assignments stay as completed or cancelled rows.
///
/// # Errors
///
/// Returns an error if the query or decoding fails.
pub fn active_assignment_for_request(
    conn: &Connection,
    request_id: i64,
) -> Result<Option<Assignment>, PersistenceError> {
    let row = conn
        .query_row(
            "SELECT id, pengajuan_id, petugas_id, armada_id, jadwal_angkut,
                    status, catatan, berat_terangkut_kg
             FROM penugasan
             WHERE pengajuan_id = ?1 AND status = 'aktif'
             ORDER BY id DESC LIMIT 1",
            params![request_id],
            |row| {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                    row.get(6)?,
                    row.get(7)?,
                ))
            },
        )
        .optional()?;

    row.map(assignment_from_columns).transpose()
}

/// Lists the status history for a reference, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn history_for_ref(
    conn: &Connection,
    ref_type: RefType,
    ref_id: i64,
) -> Result<Vec<StatusHistoryRecord>, PersistenceError> {
    let mut stmt = conn.prepare(
        "SELECT id, ref_type, ref_id, status_sebelumnya, status_baru,
                catatan, actor_user_id, actor_type, created_at
         FROM riwayat_status
         WHERE ref_type = ?1 AND ref_id = ?2
         ORDER BY id",
    )?;

    let records: Vec<StatusHistoryRecord> = stmt
        .query_map(params![ref_type.as_str(), ref_id], |row| {
            Ok(StatusHistoryRecord {
                id: row.get(0)?,
                ref_type: row.get(1)?,
                ref_id: row.get(2)?,
                previous_status: row.get(3)?,
                new_status: row.get(4)?,
                note: row.get(5)?,
                actor_user_id: row.get(6)?,
                actor_type: row.get(7)?,
                created_at: row.get(8)?,
            })
        })?
        .collect::<Result<Vec<StatusHistoryRecord>, rusqlite::Error>>()?;

    Ok(records)
}
