//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

use crate::components::deck::Deck;

/// ストック（山札）からウェスト（捨て札）にカードをめくれるかチェックする。
pub fn can_deal_from_stock(stock: &Deck) -> bool {
    !stock.is_empty()
}

/// ストック（山札）が空のときに、ウェスト（捨て札）からストックにカードを戻せるかチェックする。
pub fn can_reset_stock_from_waste(stock: &Deck, waste: &Deck) -> bool {
    stock.is_empty() && !waste.is_empty()
}
