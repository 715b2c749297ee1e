use diesel::prelude::*;

use crate::domain::carer::{Carer as DomainCarer, NewCarer as DomainNewCarer};
use crate::domain::types::{AgreementNumber, CarerId, FullName, PhoneNumber, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::carers)]
/// Diesel model for [`crate::domain::carer::Carer`].
pub struct Carer {
    pub id: i64,
    pub full_name: String,
    pub birth_year: i32,
    pub phone_number: String,
    pub agreement_number: Option<String>,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::carers)]
/// Insertable form of [`Carer`]. Also used as the changeset when re-saving a row.
pub struct NewCarer<'a> {
    pub full_name: &'a str,
    pub birth_year: i32,
    pub phone_number: &'a str,
}

impl TryFrom<Carer> for DomainCarer {
    type Error = TypeConstraintError;

    fn try_from(carer: Carer) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CarerId::new(carer.id)?,
            full_name: FullName::new(carer.full_name)?,
            birth_year: carer.birth_year,
            phone_number: PhoneNumber::new(carer.phone_number)?,
            agreement_number: carer
                .agreement_number
                .filter(|value| !value.trim().is_empty())
                .map(AgreementNumber::new)
                .transpose()?,
        })
    }
}

impl<'a> From<&'a DomainNewCarer> for NewCarer<'a> {
    fn from(carer: &'a DomainNewCarer) -> Self {
        Self {
            full_name: carer.full_name.as_str(),
            birth_year: carer.birth_year,
            phone_number: carer.phone_number.as_str(),
        }
    }
}
