use std::{io, path::Path};

use jfs::Store;

use cepmap_core::repositories::{Error, UserRecordRepo};
use cepmap_entities::user::RegisteredUser;

/// Fixed storage key of the single user record.
const RECORD_KEY: &str = "user";

/// A record store backed by one JSON file per key inside the storage
/// directory.
#[derive(Clone)]
pub struct JsonFileRecordStore {
    json_store: Store,
}

impl JsonFileRecordStore {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

impl UserRecordRepo for JsonFileRecordStore {
    fn get(&self) -> Result<Option<RegisteredUser>, Error> {
        match self.json_store.get::<RegisteredUser>(RECORD_KEY) {
            Ok(user) => Ok(Some(user)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::Io(err)),
        }
    }

    fn set(&self, user: &RegisteredUser) -> Result<(), Error> {
        self.json_store
            .save_with_id(user, RECORD_KEY)
            .map(|_| ())
            .map_err(Error::Io)
    }

    fn clear(&self) -> Result<(), Error> {
        match self.json_store.delete(RECORD_KEY) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(Error::Io(err)),
        }
    }
}
