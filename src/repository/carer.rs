//! Repository implementation for carers.

use diesel::{Connection, prelude::*};

use crate::{
    domain::{
        carer::{Carer, NewCarer},
        types::{AgreementNumber, CarerId, FullName, PhoneNumber},
    },
    models::carer::{Carer as DbCarer, NewCarer as DbNewCarer},
    repository::{
        CarerReader, CarerWriter, DieselRepository,
        errors::{RepositoryError, RepositoryResult},
    },
};

fn into_domain(db_carer: DbCarer) -> RepositoryResult<Carer> {
    Carer::try_from(db_carer).map_err(RepositoryError::from)
}

impl CarerReader for DieselRepository {
    fn get_carer_by_id(&self, id: CarerId) -> RepositoryResult<Option<Carer>> {
        use crate::schema::carers;

        let mut conn = self.conn()?;

        let carer = carers::table
            .find(id.get())
            .select(DbCarer::as_select())
            .first::<DbCarer>(&mut conn)
            .optional()?;

        carer.map(into_domain).transpose()
    }

    fn get_carer_by_agreement_number(
        &self,
        agreement_number: &AgreementNumber,
    ) -> RepositoryResult<Option<Carer>> {
        use crate::schema::carers;

        let mut conn = self.conn()?;

        let carer = carers::table
            .filter(carers::agreement_number.eq(agreement_number.as_str()))
            .order(carers::id.asc())
            .select(DbCarer::as_select())
            .first::<DbCarer>(&mut conn)
            .optional()?;

        carer.map(into_domain).transpose()
    }

    fn get_carer_by_phone_number(
        &self,
        phone_number: &PhoneNumber,
    ) -> RepositoryResult<Option<Carer>> {
        use crate::schema::carers;

        let mut conn = self.conn()?;

        let carer = carers::table
            .filter(carers::phone_number.eq(phone_number.as_str()))
            .order(carers::id.asc())
            .select(DbCarer::as_select())
            .first::<DbCarer>(&mut conn)
            .optional()?;

        carer.map(into_domain).transpose()
    }

    fn carer_exists_by_full_name_and_phone_number(
        &self,
        full_name: &FullName,
        phone_number: &PhoneNumber,
    ) -> RepositoryResult<bool> {
        use crate::schema::carers;
        use diesel::dsl::{exists, select};

        let mut conn = self.conn()?;

        let found = select(exists(
            carers::table
                .filter(carers::full_name.eq(full_name.as_str()))
                .filter(carers::phone_number.eq(phone_number.as_str())),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(found)
    }

    fn list_carers(&self) -> RepositoryResult<Vec<Carer>> {
        use crate::schema::carers;

        let mut conn = self.conn()?;

        carers::table
            .order(carers::id.asc())
            .select(DbCarer::as_select())
            .load::<DbCarer>(&mut conn)?
            .into_iter()
            .map(into_domain)
            .collect()
    }
}

impl CarerWriter for DieselRepository {
    fn save_carer(&self, new_carer: &NewCarer) -> RepositoryResult<Carer> {
        use crate::schema::carers;

        let mut conn = self.conn()?;

        let db_new_carer: DbNewCarer = new_carer.into();

        let db_carer = conn.transaction::<DbCarer, diesel::result::Error, _>(|conn| {
            match new_carer.id {
                Some(id) => diesel::insert_into(carers::table)
                    .values((carers::id.eq(id.get()), &db_new_carer))
                    .on_conflict(carers::id)
                    .do_update()
                    .set(&db_new_carer)
                    .returning(DbCarer::as_returning())
                    .get_result(conn),
                None => diesel::insert_into(carers::table)
                    .values(&db_new_carer)
                    .returning(DbCarer::as_returning())
                    .get_result(conn),
            }
        })?;

        into_domain(db_carer)
    }

    fn delete_carer(&self, id: CarerId) -> RepositoryResult<()> {
        use crate::schema::carers;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(carers::table.find(id.get())).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
