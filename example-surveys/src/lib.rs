pub mod quick_commerce;

// Re-export quick_commerce items
pub use quick_commerce::{
    AGE_GROUPS, AGREEMENT, CATEGORIES_ERROR, FUTURE_USAGE, HOUSEHOLD_TYPES, IMPORTANCE,
    LOCAL_SHOP_IMPACTS, ORDER_VALUES, OTHER_PLATFORM, PLATFORMS, PLATFORMS_ERROR, PRICE_COMPARISONS,
    PRICE_ERROR, PRICE_SENSITIVITY, PRODUCT_CATEGORIES, PURCHASE_FREQUENCY_CHANGES, SATISFACTION,
    TIME_SAVED, USAGE_FREQUENCIES, quick_commerce,
};
