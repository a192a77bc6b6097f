use crate::model::auth::NewClinicDto;

/// Tenant root. Only the identifying fields are needed outside the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Clinic {
    pub id: i32,
    pub name: String,
}

impl Clinic {
    pub fn from_entity(entity: entity::clinic::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

/// Parameters for creating a clinic.
#[derive(Debug, Clone, Default)]
pub struct CreateClinicParams {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub tax_id: String,
    pub legal_name: String,
    pub postal_code: String,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
    pub district: String,
    pub city: String,
    pub state: String,
    pub ibge_code: String,
}

impl CreateClinicParams {
    /// Clinic with only a name and contact email, as created by self-registration.
    pub fn named(name: String, email: String) -> Self {
        Self {
            name,
            email,
            ..Default::default()
        }
    }

    /// Full clinic registration; the clinic shares the admin's email.
    pub fn from_dto(dto: NewClinicDto, email: String) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            email,
            tax_id: dto.tax_id,
            legal_name: dto.legal_name,
            postal_code: dto.postal_code,
            street: dto.street,
            number: dto.number,
            complement: dto.complement,
            district: dto.district,
            city: dto.city,
            state: dto.state,
            ibge_code: dto.ibge_code,
        }
    }
}
