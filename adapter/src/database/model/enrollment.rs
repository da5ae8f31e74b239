use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{
    enrollment::{Address, Enrollment},
    id::{EnrollmentId, UserId},
};

#[derive(sqlx::FromRow)]
pub struct EnrollmentRow {
    pub enrollment_id: EnrollmentId,
    pub user_id: UserId,
    pub name: String,
    pub cpf: String,
    pub birthday: NaiveDate,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
pub struct AddressRow {
    pub cep: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub number: String,
    pub neighborhood: String,
    pub address_detail: Option<String>,
}

impl From<AddressRow> for Address {
    fn from(value: AddressRow) -> Self {
        let AddressRow {
            cep,
            street,
            city,
            state,
            number,
            neighborhood,
            address_detail,
        } = value;
        Address {
            cep,
            street,
            city,
            state,
            number,
            neighborhood,
            address_detail,
        }
    }
}

// The address lives in its own table, so the row is combined with it here
// instead of through `From`.
impl EnrollmentRow {
    pub fn into_enrollment(self, address: Option<Address>) -> Enrollment {
        let EnrollmentRow {
            enrollment_id,
            user_id,
            name,
            cpf,
            birthday,
            phone,
            created_at,
            updated_at,
        } = self;
        Enrollment {
            id: enrollment_id,
            user_id,
            name,
            cpf,
            birthday,
            phone,
            address,
            created_at,
            updated_at,
        }
    }
}
