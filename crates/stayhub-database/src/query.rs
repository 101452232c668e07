//! Dynamic SQL construction from filter and ordering values.
//!
//! Column names come from repository code, never from callers; only the
//! compared values are bound as parameters.

use sqlx::{Postgres, QueryBuilder};

use stayhub_core::types::{FilterField, FilterOp, FilterValue, OrderDirection, Ordering};

/// Append a `WHERE` clause for the given filters.
pub fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filters: &[FilterField]) {
    for (i, filter) in filters.iter().enumerate() {
        qb.push(if i == 0 { " WHERE " } else { " AND " });
        qb.push(&filter.field);

        match filter.op {
            FilterOp::Eq => {
                qb.push(" = ");
                push_value(qb, &filter.value);
            }
            FilterOp::Lt => {
                qb.push(" < ");
                push_value(qb, &filter.value);
            }
            FilterOp::Lte => {
                qb.push(" <= ");
                push_value(qb, &filter.value);
            }
            FilterOp::Gte => {
                qb.push(" >= ");
                push_value(qb, &filter.value);
            }
            FilterOp::In => {
                qb.push(" = ANY(");
                push_value(qb, &filter.value);
                qb.push(")");
            }
        }
    }
}

/// Append an `ORDER BY` clause.
pub fn push_ordering(qb: &mut QueryBuilder<'_, Postgres>, ordering: &Ordering) {
    qb.push(" ORDER BY ");
    qb.push(&ordering.field);
    qb.push(match ordering.direction {
        OrderDirection::Asc => " ASC",
        OrderDirection::Desc => " DESC",
    });
}

fn push_value(qb: &mut QueryBuilder<'_, Postgres>, value: &FilterValue) {
    match value {
        FilterValue::String(s) => qb.push_bind(s.clone()),
        FilterValue::Integer(i) => qb.push_bind(*i),
        FilterValue::Uuid(u) => qb.push_bind(*u),
        FilterValue::Date(d) => qb.push_bind(*d),
        FilterValue::StringList(xs) => qb.push_bind(xs.clone()),
        FilterValue::UuidList(xs) => qb.push_bind(xs.clone()),
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn builds_range_select_with_ordering() {
        let room_id = Uuid::new_v4();
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        let mut qb = QueryBuilder::new("SELECT * FROM room_inventory");
        push_filters(
            &mut qb,
            &[
                FilterField::eq_uuid("room_id", room_id),
                FilterField::date_gte("date", start),
                FilterField::date_lte("date", end),
            ],
        );
        push_ordering(&mut qb, &Ordering::asc("date"));

        assert_eq!(
            qb.sql(),
            "SELECT * FROM room_inventory WHERE room_id = $1 AND date >= $2 \
             AND date <= $3 ORDER BY date ASC"
        );
    }

    #[test]
    fn in_filter_uses_any() {
        let ids = vec![Uuid::new_v4(), Uuid::new_v4()];

        let mut qb = QueryBuilder::new("SELECT * FROM rooms");
        push_filters(
            &mut qb,
            &[FilterField::new(
                "id",
                FilterOp::In,
                FilterValue::UuidList(ids),
            )],
        );

        assert_eq!(qb.sql(), "SELECT * FROM rooms WHERE id = ANY($1)");
    }
}
