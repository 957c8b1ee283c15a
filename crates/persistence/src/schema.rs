// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rusqlite::Connection;
use tracing::info;

use crate::error::PersistenceError;

/// Initializes the database schema.
///
/// # Arguments
///
/// * `conn` - The database connection to initialize
///
/// # Errors
///
/// Returns an error if schema creation fails.
pub fn initialize_schema(conn: &Connection) -> Result<(), PersistenceError> {
    info!("Initializing database schema");

    // Enable foreign key enforcement
    conn.execute("PRAGMA foreign_keys = ON", [])?;

    conn.execute_batch(
        "
        -- Service areas and their sub-areas
        CREATE TABLE IF NOT EXISTS wilayah (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nama TEXT NOT NULL,
            kecamatan TEXT NOT NULL,
            latitude REAL,
            longitude REAL,
            is_active INTEGER NOT NULL DEFAULT 1 CHECK(is_active IN (0, 1))
        );

        CREATE TABLE IF NOT EXISTS kampung (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            wilayah_id INTEGER NOT NULL,
            nama TEXT NOT NULL,
            latitude REAL,
            longitude REAL,
            urutan_rute INTEGER NOT NULL DEFAULT 0,
            FOREIGN KEY(wilayah_id) REFERENCES wilayah(id)
        );

        CREATE INDEX IF NOT EXISTS idx_kampung_wilayah
            ON kampung(wilayah_id);

        -- Officers and fleet vehicles
        CREATE TABLE IF NOT EXISTS petugas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            nama TEXT NOT NULL,
            wilayah_id INTEGER,
            is_available INTEGER NOT NULL DEFAULT 1 CHECK(is_available IN (0, 1)),
            hari_libur_json TEXT NOT NULL DEFAULT '[]',
            FOREIGN KEY(wilayah_id) REFERENCES wilayah(id)
        );

        CREATE TABLE IF NOT EXISTS armada (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nomor_polisi TEXT NOT NULL UNIQUE,
            kapasitas_kg INTEGER NOT NULL CHECK(kapasitas_kg > 0),
            status TEXT NOT NULL CHECK(status IN ('aktif', 'perbaikan', 'nonaktif')),
            wilayah_id INTEGER,
            ketua_petugas_id INTEGER,
            FOREIGN KEY(wilayah_id) REFERENCES wilayah(id),
            FOREIGN KEY(ketua_petugas_id) REFERENCES petugas(id)
        );

        -- Routine collection schedules, one per fleet per weekday
        CREATE TABLE IF NOT EXISTS jadwal_rutin (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            armada_id INTEGER NOT NULL,
            hari INTEGER NOT NULL CHECK(hari BETWEEN 1 AND 7),
            FOREIGN KEY(armada_id) REFERENCES armada(id)
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_jadwal_armada_hari
            ON jadwal_rutin(armada_id, hari);

        CREATE TABLE IF NOT EXISTS jadwal_rutin_kampung (
            jadwal_id INTEGER NOT NULL,
            kampung_id INTEGER NOT NULL,
            urutan INTEGER NOT NULL,
            PRIMARY KEY (jadwal_id, kampung_id),
            FOREIGN KEY(jadwal_id) REFERENCES jadwal_rutin(id),
            FOREIGN KEY(kampung_id) REFERENCES kampung(id)
        );

        -- Pickup requests and their assignments
        CREATE TABLE IF NOT EXISTS pengajuan (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER,
            nama_tamu TEXT,
            telepon_tamu TEXT,
            email_tamu TEXT,
            wilayah_id INTEGER,
            kampung_id INTEGER,
            alamat TEXT NOT NULL,
            latitude REAL,
            longitude REAL,
            estimasi_berat_kg INTEGER,
            foto_path TEXT,
            status TEXT NOT NULL DEFAULT 'diajukan' CHECK(status IN (
                'diajukan', 'diverifikasi', 'dijadwalkan',
                'diangkut', 'selesai', 'ditolak'
            )),
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(wilayah_id) REFERENCES wilayah(id),
            FOREIGN KEY(kampung_id) REFERENCES kampung(id)
        );

        CREATE INDEX IF NOT EXISTS idx_pengajuan_status
            ON pengajuan(status);

        CREATE TABLE IF NOT EXISTS penugasan (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            pengajuan_id INTEGER NOT NULL,
            petugas_id INTEGER NOT NULL,
            armada_id INTEGER,
            jadwal_angkut TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'aktif' CHECK(status IN (
                'aktif', 'selesai', 'dibatalkan'
            )),
            catatan TEXT,
            berat_terangkut_kg INTEGER,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY(pengajuan_id) REFERENCES pengajuan(id),
            FOREIGN KEY(petugas_id) REFERENCES petugas(id),
            FOREIGN KEY(armada_id) REFERENCES armada(id)
        );

        CREATE INDEX IF NOT EXISTS idx_penugasan_pengajuan
            ON penugasan(pengajuan_id);

        -- Append-only status history; no update or delete path exists
        CREATE TABLE IF NOT EXISTS riwayat_status (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            ref_type TEXT NOT NULL CHECK(ref_type IN ('pengajuan', 'pengaduan')),
            ref_id INTEGER NOT NULL,
            status_sebelumnya TEXT,
            status_baru TEXT NOT NULL,
            catatan TEXT,
            actor_user_id INTEGER,
            actor_type TEXT NOT NULL,
            created_at DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS idx_riwayat_ref
            ON riwayat_status(ref_type, ref_id);
        ",
    )?;

    info!("Database schema initialized");

    Ok(())
}
