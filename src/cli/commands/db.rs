use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::migrate::run_pending_migrations;
use crate::store::sqlite::SqliteStore;
use crate::store::stats;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // One shared store instance
        let mut store: Option<SqliteStore> = None;

        fn get_store<'a>(
            store: &'a mut Option<SqliteStore>,
            db_path: &str,
        ) -> AppResult<&'a mut SqliteStore> {
            if store.is_none() {
                *store = Some(SqliteStore::open(db_path)?);
            }
            Ok(store.as_mut().unwrap())
        }

        //
        // 1) MIGRATE
        //
        if *migrate {
            let store = get_store(&mut store, &cfg.database)?;
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            run_pending_migrations(&store.conn)?;
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        //
        // 2) INFO
        //
        if *info {
            let store = get_store(&mut store, &cfg.database)?;
            stats::print_snapshot_info(store, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            let store = get_store(&mut store, &cfg.database)?;

            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = store
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            let store = get_store(&mut store, &cfg.database)?;
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);

            store.conn.execute_batch("VACUUM;")?;

            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
