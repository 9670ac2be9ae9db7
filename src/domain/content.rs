//! Static copy rendered by the demo.
//!
//! Everything here is deterministic; panels reveal the same content on every
//! activation.

use super::panel::PanelId;

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub price_cents: u32,
}

/// A line in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    #[must_use]
    pub const fn subtotal_cents(&self) -> u32 {
        self.product.price_cents * self.quantity
    }
}

/// Panel-specific body of the resolved content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelBody {
    Products(&'static [Product]),
    Cart(&'static [CartLine]),
    Profile {
        name: &'static str,
        email: &'static str,
    },
}

/// Content shown once a panel has resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub body: PanelBody,
    pub origin: &'static str,
}

/// Short benefit blurb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Benefit {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

const PRODUCT_A: Product = Product {
    name: "Product A",
    price_cents: 4999,
};

const PRODUCT_B: Product = Product {
    name: "Product B",
    price_cents: 7999,
};

const CATALOG: PanelContent = PanelContent {
    title: "Product Catalog",
    subtitle: "Micro-Frontend A",
    description: "This micro-frontend is owned by the Catalog Team. It can be deployed \
                  independently without affecting other parts of the app.",
    body: PanelBody::Products(&[PRODUCT_A, PRODUCT_B]),
    origin: "product-catalog-app.example.com",
};

const CART: PanelContent = PanelContent {
    title: "Shopping Cart",
    subtitle: "Micro-Frontend B",
    description: "This micro-frontend is owned by the Cart Team. It keeps its own state \
                  and can be updated without touching Product Catalog.",
    body: PanelBody::Cart(&[CartLine {
        product: PRODUCT_A,
        quantity: 1,
    }]),
    origin: "shopping-cart-app.example.com",
};

const PROFILE: PanelContent = PanelContent {
    title: "User Profile",
    subtitle: "Micro-Frontend C",
    description: "This micro-frontend is owned by the Profile Team. It is built with a \
                  different framework than the others - technology freedom!",
    body: PanelBody::Profile {
        name: "John Doe",
        email: "john@example.com",
    },
    origin: "user-profile-app.example.com",
};

impl PanelId {
    /// Resolved content for this panel.
    #[must_use]
    pub const fn content(self) -> &'static PanelContent {
        match self {
            Self::Catalog => &CATALOG,
            Self::Cart => &CART,
            Self::Profile => &PROFILE,
        }
    }
}

pub const TITLE: &str = "Micro-Frontend Architecture Demo";

pub const SUBTITLE: &str = "See how micro-frontends load independently at runtime";

pub const FEDERATION_TITLE: &str = "Module Federation Simulation";

pub const FEDERATION_TEXT: &str = "Each panel below represents a separate micro-frontend \
    application that can be deployed independently. Use the controls to simulate loading \
    them at runtime.";

pub const SCENARIO_TITLE: &str = "Real-World Scenario";

pub const SCENARIO_TEXT: &str = "In production, each micro-frontend would be hosted on its \
    own domain/CDN and loaded via Module Federation. The host app only knows the remote \
    entry points. When a team deploys a new version, users automatically get the latest \
    code without redeploying the host application.";

pub const BENEFITS: [Benefit; 3] = [
    Benefit {
        icon: "🚀",
        title: "Independent Deploy",
        text: "Each team can deploy their micro-frontend without coordinating with others",
    },
    Benefit {
        icon: "🔧",
        title: "Tech Freedom",
        text: "Different teams can use different frameworks (React, Vue, Angular)",
    },
    Benefit {
        icon: "⚡",
        title: "Runtime Composition",
        text: "Micro-frontends are composed at runtime, not build time",
    },
];

pub const CODE_SAMPLE_TITLE: &str = "Host Application (Shell)";

pub const CODE_SAMPLE: &str = r"// Host Application (Shell)
import { lazy, Suspense } from 'react';

// Lazy load remote micro-frontends
const ProductCatalog = lazy(() =>
  import('productApp/ProductCatalog')
);

const ShoppingCart = lazy(() =>
  import('cartApp/ShoppingCart')
);

// Module Federation Config (webpack.config.js)
new ModuleFederationPlugin({
  name: 'host',
  remotes: {
    productApp: 'productApp@http://product-app.com/remoteEntry.js',
    cartApp: 'cartApp@http://cart-app.com/remoteEntry.js',
  },
  shared: {
    react: { singleton: true },
    'react-dom': { singleton: true }
  }
});";

/// Formats an amount in cents as dollars, e.g. `$49.99`.
#[must_use]
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Sum of every line in the cart.
#[must_use]
pub fn cart_total_cents(lines: &[CartLine]) -> u32 {
    lines.iter().map(CartLine::subtotal_cents).sum()
}
