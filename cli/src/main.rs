use std::path::Path;
use log::info;
use seeddb::config::{self, Config};
use seeddb::db::{self, Db};
use seeddb::util;

/// Name inserted by every run of the seed sequence.
const SEED_USER: &str = "John Doe";

// /usr/local/etc/seeddb/config.yaml
const CONFIG_PATH: &str = "config.yaml";
const ENV_PREFIX: &str = "SEEDDB_";

fn cfg_factory() -> Result<Box<dyn Config>, String> {
    if Path::new(CONFIG_PATH).is_file() {
        Ok(Box::new(config::file::new(CONFIG_PATH)?))
    } else {
        Ok(Box::new(config::env::new(ENV_PREFIX.to_owned())))
    }
}

fn main() -> Result<(), String> {
    env_logger::init();
    info!("current local time: {}", util::local_time());
    info!("current local date: {}", util::local_date());

    let cfg = cfg_factory()?;
    let mut db = db::open(cfg.as_ref()).map_err(|e| e.to_string())?;
    let id = db.insert_user(SEED_USER).map_err(|e| e.to_string())?;
    info!("inserted user {SEED_USER:?} with id {id}");
    db.close().map_err(|e| e.to_string())
}
