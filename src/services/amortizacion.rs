//! Calendario de amortización
//!
//! Cálculo puro del calendario de mensualidades de un contrato: sin I/O,
//! determinista. La mensualidad es fija e igual para todos los pagos; el
//! último pago NO se ajusta para absorber el residuo del redondeo, por lo
//! que la suma puede desviarse unos centavos del monto financiado.

use chrono::{Months, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::pago::{EstadoPago, NuevoPago};
use crate::utils::errors::AppError;

/// Método de pago con el que nace cada mensualidad
pub const METODO_PENDIENTE: &str = "pendiente";

/// Mensualidad fija: (precio - enganche) / plazo, redondeada a 2 decimales
/// con punto medio alejándose de cero.
pub fn calcular_mensualidad(
    precio_total: Decimal,
    enganche: Decimal,
    plazo_meses: i32,
) -> Decimal {
    ((precio_total - enganche) / Decimal::from(plazo_meses))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Sumar meses calendario conservando el día del mes; cuando el mes destino
/// es más corto, la fecha se recorta al último día (31 de enero + 1 mes es
/// el 28 o 29 de febrero, nunca el 3 de marzo).
pub fn sumar_meses_conservando_dia(
    fecha: NaiveDate,
    meses: u32,
) -> Result<NaiveDate, AppError> {
    fecha
        .checked_add_months(Months::new(meses))
        .ok_or_else(|| AppError::Internal("Fecha de pago fuera de rango".to_string()))
}

/// Generar el calendario completo: un pago por mes, numerados 1..plazo,
/// el primero un mes después de la fecha de inicio.
pub fn generar_calendario(
    id_contrato: i32,
    fecha_inicio: NaiveDate,
    plazo_meses: i32,
    mensualidad: Decimal,
) -> Result<Vec<NuevoPago>, AppError> {
    let mut pagos = Vec::with_capacity(plazo_meses as usize);
    for numero in 1..=plazo_meses {
        let fecha_pago = sumar_meses_conservando_dia(fecha_inicio, numero as u32)?;
        pagos.push(NuevoPago {
            id_contrato,
            numero_pago: numero,
            monto: mensualidad,
            fecha_pago,
            metodo_pago: METODO_PENDIENTE.to_string(),
            estado_pago: EstadoPago::Pendiente.as_str().to_string(),
        });
    }
    Ok(pagos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fecha(anio: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(anio, mes, dia).unwrap()
    }

    fn decimal(valor: &str) -> Decimal {
        valor.parse().unwrap()
    }

    #[test]
    fn mensualidad_del_escenario_base() {
        // 120000 - 20000 a 10 meses: mensualidad exacta de 10000.00
        let mensualidad =
            calcular_mensualidad(decimal("120000.00"), decimal("20000.00"), 10);
        assert_eq!(mensualidad, decimal("10000.00"));
    }

    #[test]
    fn mensualidad_redondea_a_dos_decimales() {
        // 1000 / 3 = 333.333... -> 333.33
        let mensualidad = calcular_mensualidad(decimal("1000.00"), decimal("0.00"), 3);
        assert_eq!(mensualidad, decimal("333.33"));
    }

    #[test]
    fn fin_de_enero_recorta_a_febrero_bisiesto() {
        // 2024 es bisiesto: 31 de enero + 1 mes = 29 de febrero
        let primera = sumar_meses_conservando_dia(fecha(2024, 1, 31), 1).unwrap();
        assert_eq!(primera, fecha(2024, 2, 29));

        // y + 2 meses recupera el día 31
        let segunda = sumar_meses_conservando_dia(fecha(2024, 1, 31), 2).unwrap();
        assert_eq!(segunda, fecha(2024, 3, 31));
    }

    #[test]
    fn fin_de_enero_recorta_a_febrero_comun() {
        let primera = sumar_meses_conservando_dia(fecha(2023, 1, 31), 1).unwrap();
        assert_eq!(primera, fecha(2023, 2, 28));
    }

    #[test]
    fn calendario_completo_y_numerado() {
        let pagos =
            generar_calendario(1, fecha(2024, 6, 15), 12, decimal("2500.00")).unwrap();

        assert_eq!(pagos.len(), 12);
        for (indice, pago) in pagos.iter().enumerate() {
            assert_eq!(pago.numero_pago, indice as i32 + 1);
            assert_eq!(pago.monto, decimal("2500.00"));
            assert_eq!(pago.estado_pago, "pendiente");
            assert_eq!(pago.metodo_pago, "pendiente");
        }

        // Fechas estrictamente crecientes, un mes de separación
        assert_eq!(pagos[0].fecha_pago, fecha(2024, 7, 15));
        assert_eq!(pagos[11].fecha_pago, fecha(2025, 6, 15));
        for ventana in pagos.windows(2) {
            assert!(ventana[0].fecha_pago < ventana[1].fecha_pago);
        }
    }

    #[test]
    fn calendario_desde_fin_de_mes() {
        // Inicio el 31 de enero de 2024 con plazo 2 (escenario de la
        // propiedad de conservación de día con recorte)
        let pagos =
            generar_calendario(9, fecha(2024, 1, 31), 2, decimal("500.00")).unwrap();
        assert_eq!(pagos[0].fecha_pago, fecha(2024, 2, 29));
        assert_eq!(pagos[1].fecha_pago, fecha(2024, 3, 31));
    }

    #[test]
    fn deriva_de_redondeo_acotada() {
        // Sin ajuste del último pago, la deriva acumulada queda acotada
        // por un centavo por mensualidad.
        let casos = [
            ("1000.00", "0.00", 3),
            ("99999.99", "1234.56", 7),
            ("120000.00", "20000.00", 10),
            ("54321.00", "321.00", 36),
        ];
        for (precio, enganche, plazo) in casos {
            let precio = decimal(precio);
            let enganche = decimal(enganche);
            let mensualidad = calcular_mensualidad(precio, enganche, plazo);
            let pagos =
                generar_calendario(1, fecha(2024, 3, 1), plazo, mensualidad).unwrap();
            let suma: Decimal = pagos.iter().map(|p| p.monto).sum();
            let financiado = precio - enganche;
            let deriva = (suma - financiado).abs();
            let cota = decimal("0.01") * Decimal::from(plazo);
            assert!(
                deriva <= cota,
                "deriva {} excede la cota {} para plazo {}",
                deriva,
                cota,
                plazo
            );
        }
    }
}
