//! Order cloning (Prototype pattern).
//!
//! # Prototype in Rust (for beginners)
//!
//! The Prototype pattern creates new objects by copying an existing one
//! instead of building them from scratch.  In Rust the [`Clone`] trait *is*
//! the prototype interface: `order.clone()` returns a brand-new `Order`.
//!
//! Because [`Order`] owns its products in a `Vec<Product>` (no shared
//! pointers), the derived `Clone` is a deep copy.  Changing a product in the
//! clone never changes the original, and vice versa.

use std::fmt;

/// A catalogue item with a name and a price.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Prices use Rust's shortest round-trip `f64` formatting: `1200.0` prints
/// as `1200` and `1234567.0` as `1234567`.  There is no fixed precision and
/// no exponent form.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Product: {}, Price: {}", self.name, self.price)
    }
}

/// A customer order: products plus shipping, discount, and payment details.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    products: Vec<Product>,
    shipping_cost: f64,
    discount: f64,
    payment_method: String,
}

impl Order {
    /// Creates an order with no products.
    pub fn new(shipping_cost: f64, discount: f64, payment_method: impl Into<String>) -> Self {
        Self {
            products: Vec::new(),
            shipping_cost,
            discount,
            payment_method: payment_method.into(),
        }
    }

    /// Adds a copy of `product`.  Later changes to the caller's `product` do
    /// not affect the order.
    pub fn add_product(&mut self, product: &Product) {
        self.products.push(product.clone());
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Mutable access to the stored products.
    pub fn products_mut(&mut self) -> &mut [Product] {
        &mut self.products
    }

    pub fn shipping_cost(&self) -> f64 {
        self.shipping_cost
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }
}

/// Amounts are formatted like [`Product`] prices (shortest round-trip, no
/// exponent).
impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order details:")?;
        for product in &self.products {
            writeln!(f, "{product}")?;
        }
        write!(
            f,
            "Shipping Cost: {}, Discount: {}, Payment: {}",
            self.shipping_cost, self.discount, self.payment_method
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        let mut order = Order::new(50.0, 10.0, "Credit Card");
        order.add_product(&Product::new("Laptop", 1200.0));
        order.add_product(&Product::new("Smartphone", 800.0));
        order
    }

    #[test]
    fn test_clone_is_equal_to_original() {
        // Arrange
        let original = sample_order();

        // Act
        let cloned = original.clone();

        // Assert
        assert_eq!(original, cloned);
        assert_eq!(cloned.products().len(), 2);
        assert_eq!(cloned.payment_method(), "Credit Card");
    }

    #[test]
    fn test_clone_does_not_share_products_with_original() {
        // Arrange
        let original = sample_order();
        let mut cloned = original.clone();

        // Act
        cloned.products_mut()[0].price = 999.0;
        cloned.add_product(&Product::new("Mouse", 25.0));

        // Assert
        assert_eq!(original.products()[0].price, 1200.0);
        assert_eq!(original.products().len(), 2);
        assert_eq!(cloned.products().len(), 3);
    }

    #[test]
    fn test_add_product_stores_independent_copy() {
        let mut product = Product::new("Tablet", 300.0);
        let mut order = Order::new(0.0, 0.0, "Cash");

        order.add_product(&product);
        product.price = 1.0;

        assert_eq!(order.products()[0].price, 300.0);
    }

    #[test]
    fn test_product_display_format() {
        assert_eq!(
            Product::new("Laptop", 1200.0).to_string(),
            "Product: Laptop, Price: 1200"
        );
        assert_eq!(
            Product::new("Cable", 9.5).to_string(),
            "Product: Cable, Price: 9.5"
        );
    }

    #[test]
    fn test_display_prints_large_and_fractional_amounts_in_full() {
        // Arrange
        let mut order = Order::new(1234567.0, 0.125, "Wire");
        order.add_product(&Product::new("Server", 9876543.5));

        // Act
        let text = order.to_string();

        // Assert – no precision cut-off, no exponent
        assert!(text.contains("Product: Server, Price: 9876543.5"));
        assert!(text.ends_with("Shipping Cost: 1234567, Discount: 0.125, Payment: Wire"));
    }

    #[test]
    fn test_order_display_lists_products_then_totals() {
        assert_eq!(
            sample_order().to_string(),
            "Order details:\n\
             Product: Laptop, Price: 1200\n\
             Product: Smartphone, Price: 800\n\
             Shipping Cost: 50, Discount: 10, Payment: Credit Card"
        );
    }

    #[test]
    fn test_empty_order_display_has_only_header_and_totals() {
        let order = Order::new(5.0, 0.0, "PayPal");
        assert_eq!(
            order.to_string(),
            "Order details:\nShipping Cost: 5, Discount: 0, Payment: PayPal"
        );
    }
}
