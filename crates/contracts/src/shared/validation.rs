//! Field rules shared by the modal forms and the backend services.
//!
//! Every rule returns `Err` with a message ready to be shown in a toast.

pub fn required(value: &str, field_label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("El campo \"{}\" es obligatorio", field_label));
    }
    Ok(())
}

/// Required and containing an `@`
pub fn email(value: &str, field_label: &str) -> Result<(), String> {
    required(value, field_label)?;
    if !value.contains('@') {
        return Err(format!("El campo \"{}\" no es un correo válido", field_label));
    }
    Ok(())
}

pub fn positive_amount(value: f64, field_label: &str) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("El campo \"{}\" debe ser mayor que cero", field_label));
    }
    Ok(())
}

pub fn percent(value: f64, field_label: &str) -> Result<(), String> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(format!("El campo \"{}\" debe estar entre 0 y 100", field_label));
    }
    Ok(())
}

/// Required ISO date (`YYYY-MM-DD`)
pub fn iso_date(value: &str, field_label: &str) -> Result<(), String> {
    required(value, field_label)?;
    chrono::NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| format!("El campo \"{}\" debe tener el formato AAAA-MM-DD", field_label))
}

/// Trimmed optional text, `None` when blank
pub fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_ref()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(required("Bebidas", "Nombre").is_ok());
        assert!(required("", "Nombre").is_err());
        assert!(required("   ", "Nombre").is_err());
        assert_eq!(
            required("", "Nombre").unwrap_err(),
            "El campo \"Nombre\" es obligatorio"
        );
    }

    #[test]
    fn test_email() {
        assert!(email("ana@correo.com", "Correo").is_ok());
        assert!(email("ana.correo.com", "Correo").is_err());
        assert!(email("ana@localhost", "Correo").is_ok());
        assert!(email("ana-arroba-correo", "Correo")
            .unwrap_err()
            .contains("no es un correo"));
        assert!(email("", "Correo").unwrap_err().contains("obligatorio"));
    }

    #[test]
    fn test_amounts() {
        assert!(positive_amount(10.5, "Total").is_ok());
        assert!(positive_amount(0.0, "Total").is_err());
        assert!(positive_amount(-3.0, "Total").is_err());
        assert!(positive_amount(f64::NAN, "Total").is_err());
        assert!(percent(0.0, "Comisión").is_ok());
        assert!(percent(100.0, "Comisión").is_ok());
        assert!(percent(100.5, "Comisión").is_err());
    }

    #[test]
    fn test_iso_date() {
        assert!(iso_date("2024-03-15", "Fecha").is_ok());
        assert!(iso_date("15.03.2024", "Fecha").is_err());
        assert!(iso_date("2024-02-30", "Fecha").is_err());
    }
}
