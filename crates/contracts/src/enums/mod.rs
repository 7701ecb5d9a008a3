//! Closed value lists used by the forms (select options) and the storage layer.
//!
//! Each enum is stored and serialized by its lowercase `code`; `display_name`
//! is what the tables and selects show.

macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident {
            $($variant:ident => ($code:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            pub fn code(&self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            pub fn display_name(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            pub fn all() -> Vec<$name> {
                vec![$($name::$variant),+]
            }

            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.display_name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::from_code(s).ok_or_else(|| {
                    anyhow::anyhow!("{}: valor desconocido '{}'", stringify!($name), s)
                })
            }
        }
    };
}

code_enum!(
    /// Active / inactive flag of master records
    RecordStatus, default = Active {
        Active => ("activo", "Activo"),
        Inactive => ("inactivo", "Inactivo"),
    }
);

code_enum!(
    ClientType, default = Person {
        Person => ("persona", "Persona natural"),
        Company => ("empresa", "Empresa"),
    }
);

code_enum!(
    PaymentMethod, default = Cash {
        Cash => ("efectivo", "Efectivo"),
        Card => ("tarjeta", "Tarjeta"),
        Transfer => ("transferencia", "Transferencia"),
    }
);

code_enum!(
    /// Lifecycle of a sale
    SaleStatus, default = Pending {
        Pending => ("pendiente", "Pendiente"),
        Completed => ("completada", "Completada"),
        Cancelled => ("anulada", "Anulada"),
    }
);

code_enum!(
    ExpenseCategory, default = Other {
        Services => ("servicios", "Servicios"),
        Purchases => ("compras", "Compras"),
        Payroll => ("nomina", "Nómina"),
        Rent => ("alquiler", "Alquiler"),
        Other => ("otros", "Otros"),
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for status in SaleStatus::all() {
            assert_eq!(SaleStatus::from_code(status.code()), Some(status));
        }
        for category in ExpenseCategory::all() {
            assert_eq!(category.code().parse::<ExpenseCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&PaymentMethod::Transfer).unwrap();
        assert_eq!(json, "\"transferencia\"");
        let parsed: RecordStatus = serde_json::from_str("\"inactivo\"").unwrap();
        assert_eq!(parsed, RecordStatus::Inactive);
    }

    #[test]
    fn test_defaults_and_labels() {
        assert_eq!(RecordStatus::default(), RecordStatus::Active);
        assert_eq!(SaleStatus::default().to_string(), "Pendiente");
        assert_eq!(ExpenseCategory::Payroll.display_name(), "Nómina");
        assert!("desconocido".parse::<ClientType>().is_err());
    }
}
