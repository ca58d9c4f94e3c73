//! Derived statistics, recomputed from the current collections on every read

use chrono::{DateTime, Duration, Local, Utc};
use rust_decimal::Decimal;
use shared::{FabricItem, InventoryStats, Movement, MovementKind, MovementTotals};

/// Aggregate snapshot over the whole inventory
///
/// `now` anchors the "today" window; calendar days are taken in local time.
pub(crate) fn inventory_stats(
    items: &[FabricItem],
    movements: &[Movement],
    now: DateTime<Local>,
) -> InventoryStats {
    let today = now.date_naive();
    InventoryStats {
        total_items: items.len(),
        total_value: items.iter().map(FabricItem::stock_value).sum(),
        low_stock: items.iter().filter(|item| item.is_low_stock()).count(),
        movements_today: movements
            .iter()
            .filter(|movement| recorded_on(movement, today))
            .count(),
    }
}

/// Aggregates over the movement ledger
pub(crate) fn movement_totals(movements: &[Movement], now: DateTime<Local>) -> MovementTotals {
    let today = now.date_naive();
    let week_ago = (now - Duration::days(7)).with_timezone(&Utc);

    let mut entered = Decimal::ZERO;
    let mut withdrawn = Decimal::ZERO;
    let mut today_count = 0;
    let mut last_seven_days = 0;

    for movement in movements {
        match movement.kind {
            MovementKind::Entry => entered += movement.quantity,
            MovementKind::Exit => withdrawn += movement.quantity,
        }
        if recorded_on(movement, today) {
            today_count += 1;
        }
        if movement.recorded_at >= week_ago {
            last_seven_days += 1;
        }
    }

    MovementTotals {
        entered,
        withdrawn,
        today: today_count,
        last_seven_days,
    }
}

fn recorded_on(movement: &Movement, day: chrono::NaiveDate) -> bool {
    movement.recorded_at.with_timezone(&Local).date_naive() == day
}
