//! The personalization flow orchestrator
//!
//! Commerce hosts dispatch work like this through string-keyed event
//! hooks; here the orchestrator owns the call order directly. One
//! [`PersonalizationFlow`] serves any number of shopper sessions: it
//! holds configuration and stage instances, never session state.

use crate::config::{ConfigError, FlowConfig};
use crate::error::FlowError;
use crate::stores::{Notice, NoticeSink, ProductStore};
use cartouche_model::{
    sanitize_field_input, Cart, CartLineItem, LineItemKey, Order, OrderLineItem, ProductId,
    RequestOrigin, Submission,
};
use cartouche_pipeline::{
    field_prompt, line_item_name, AddToCartGate, CheckoutStage, OrderAnnotator, Personalizer,
    PriceRewriter,
};

/// One add-to-cart request, fully explicit
#[derive(Debug, Clone)]
pub struct AddToCartRequest {
    /// Product being added
    pub product_id: ProductId,
    /// Variation, when the product has one
    pub variation_id: Option<ProductId>,
    /// Units requested
    pub quantity: u32,
    /// Shopper-posted form fields
    pub posted: Submission,
}

impl AddToCartRequest {
    /// Create a request for `quantity` units of a product
    #[must_use]
    pub fn new(product_id: ProductId, quantity: u32, posted: Submission) -> Self {
        Self {
            product_id,
            variation_id: None,
            quantity,
            posted,
        }
    }

    /// Select a variation
    #[must_use]
    pub fn with_variation(mut self, variation_id: ProductId) -> Self {
        self.variation_id = Some(variation_id);
        self
    }
}

/// Orchestrates the personalization pipeline
///
/// Owns the fixed stage order of [`CheckoutStage::SEQUENCE`]:
/// the gate and personalizer run inside [`add_to_cart`], the rewriter on
/// every [`recalculate_totals`] pass, display formatting on demand, and
/// the order annotator once inside [`place_order`].
///
/// [`add_to_cart`]: PersonalizationFlow::add_to_cart
/// [`recalculate_totals`]: PersonalizationFlow::recalculate_totals
/// [`place_order`]: PersonalizationFlow::place_order
#[derive(Debug)]
pub struct PersonalizationFlow {
    config: FlowConfig,
    gate: AddToCartGate,
    personalizer: Personalizer,
    rewriter: PriceRewriter,
    annotator: OrderAnnotator,
}

impl PersonalizationFlow {
    /// Create a flow from a validated configuration
    ///
    /// # Errors
    /// [`ConfigError::Invalid`] when the configuration fails validation.
    pub fn new(config: FlowConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    /// Create a flow with the default configuration
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::from_valid(FlowConfig::new())
    }

    fn from_valid(config: FlowConfig) -> Self {
        let gate = AddToCartGate::new(config.field.form_name.as_str());
        let personalizer = Personalizer::new(config.field.form_name.as_str(), config.surcharge);
        let annotator = OrderAnnotator::new(config.order_meta_label.as_str());
        Self {
            config,
            gate,
            personalizer,
            rewriter: PriceRewriter::new(),
            annotator,
        }
    }

    /// The active configuration
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Store the merchant-entered field title on a product
    ///
    /// The raw input is sanitized before storing; an empty sanitized
    /// result is stored as the empty string, not omitted. The write is
    /// followed by the store's explicit persist step.
    ///
    /// # Errors
    /// [`FlowError::UnknownProduct`] or a store persist failure.
    pub fn save_field_title(
        &self,
        store: &mut dyn ProductStore,
        product_id: ProductId,
        raw_input: &str,
    ) -> Result<(), FlowError> {
        let cleaned = sanitize_field_input(raw_input);
        let product = store
            .get_mut(product_id)
            .ok_or(FlowError::UnknownProduct(product_id))?;
        product.set_meta(&self.config.field.meta_key, cleaned);
        store.persist(product_id)?;
        tracing::debug!("stored field title for product {}", product_id);
        Ok(())
    }

    /// Read the stored field title back
    ///
    /// # Errors
    /// [`FlowError::UnknownProduct`] when the catalog misses the product.
    pub fn field_title<'a>(
        &self,
        store: &'a dyn ProductStore,
        product_id: ProductId,
    ) -> Result<Option<&'a str>, FlowError> {
        let product = store
            .get(product_id)
            .ok_or(FlowError::UnknownProduct(product_id))?;
        Ok(product.meta(&self.config.field.meta_key))
    }

    /// Render the product page prompt, if the product has a field title
    ///
    /// # Errors
    /// [`FlowError::UnknownProduct`] when the catalog misses the product.
    pub fn render_field_prompt(
        &self,
        store: &dyn ProductStore,
        product_id: ProductId,
    ) -> Result<Option<String>, FlowError> {
        let product = store
            .get(product_id)
            .ok_or(FlowError::UnknownProduct(product_id))?;
        Ok(field_prompt(product, &self.config.field))
    }

    /// Run the add-to-cart path: gate, personalize, insert
    ///
    /// On rejection, exactly one error notice with the configured message
    /// goes to the notice channel and the cart is left untouched. On
    /// success the new (or merged) line's key is returned; the line's
    /// unit price starts at the base price and is overwritten by the
    /// next totals pass.
    ///
    /// # Errors
    /// [`FlowError::Rejected`] on gate failure,
    /// [`FlowError::UnknownProduct`] when the catalog misses the product.
    pub fn add_to_cart(
        &self,
        store: &dyn ProductStore,
        cart: &mut Cart,
        notices: &mut dyn NoticeSink,
        request: &AddToCartRequest,
    ) -> Result<LineItemKey, FlowError> {
        if let Err(err) = self.gate.validate(&request.posted) {
            tracing::warn!(
                "stage {} rejected add-to-cart for product {}",
                CheckoutStage::Validate,
                request.product_id
            );
            notices.push(Notice::error(self.config.required_notice.clone()));
            return Err(err.into());
        }

        let product = store
            .get(request.product_id)
            .ok_or(FlowError::UnknownProduct(request.product_id))?;
        let personalization = self.personalizer.build(&request.posted, product);
        let line = CartLineItem::new(
            request.product_id,
            request.variation_id,
            request.quantity,
            product.price(),
            personalization,
        );
        let key = cart.add(line);
        tracing::info!(
            "stage {} added line {} for product {}",
            CheckoutStage::Personalize,
            key.short(),
            request.product_id
        );
        Ok(key)
    }

    /// Run one totals pass over the cart
    ///
    /// Safe to call any number of times per request; returns the number
    /// of lines whose price was rewritten.
    pub fn recalculate_totals(&self, cart: &mut Cart, origin: RequestOrigin) -> usize {
        let rewritten = self.rewriter.apply(cart, origin);
        tracing::debug!(
            "stage {} rewrote {} line(s) for {} origin",
            CheckoutStage::Reprice,
            rewritten,
            origin
        );
        rewritten
    }

    /// Cart display name for a line
    #[must_use]
    pub fn line_item_name(&self, base: &str, item: &CartLineItem) -> String {
        line_item_name(base, item)
    }

    /// Place an order from the cart
    ///
    /// Runs a final totals pass, snapshots every line (name from the
    /// catalog, price from the cart), copies personalization titles onto
    /// the order lines, and clears the cart. Checkout completion
    /// destroys the session cart.
    ///
    /// # Errors
    /// [`FlowError::EmptyCart`] for an empty cart,
    /// [`FlowError::UnknownProduct`] when a line references a product the
    /// catalog no longer knows (the cart is left intact in that case).
    pub fn place_order(
        &self,
        store: &dyn ProductStore,
        cart: &mut Cart,
        origin: RequestOrigin,
    ) -> Result<Order, FlowError> {
        if cart.is_empty() {
            return Err(FlowError::EmptyCart);
        }
        self.recalculate_totals(cart, origin);

        let mut order = Order::new();
        for line in cart.iter() {
            let product = store
                .get(line.product_id())
                .ok_or(FlowError::UnknownProduct(line.product_id()))?;
            let mut order_line = OrderLineItem::new(
                line.product_id(),
                product.name(),
                line.quantity(),
                line.unit_price(),
            );
            self.annotator.annotate(&mut order_line, line);
            order.push_line(order_line);
        }
        cart.clear();
        tracing::info!(
            "stage {} placed order {} with {} line(s)",
            CheckoutStage::RecordOrder,
            order.id(),
            order.lines().len()
        );
        Ok(order)
    }
}

impl Default for PersonalizationFlow {
    fn default() -> Self {
        Self::with_defaults()
    }
}
