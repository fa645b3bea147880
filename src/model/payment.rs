//! Payment methods and price breakdown

use std::fmt;

/// Selectable payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentOption {
    #[default]
    CreditDebitCard,
    BcaVirtualAccount,
}

impl PaymentOption {
    pub fn all() -> [PaymentOption; 2] {
        [PaymentOption::CreditDebitCard, PaymentOption::BcaVirtualAccount]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentOption::CreditDebitCard => "Credit/Debit Card ****1234",
            PaymentOption::BcaVirtualAccount => "BCA Virtual Account",
        }
    }

    /// Short issuer badge shown before the label
    pub fn badge(&self) -> &'static str {
        match self {
            PaymentOption::CreditDebitCard => "VISA",
            PaymentOption::BcaVirtualAccount => "BCA",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Option `steps` positions away, wrapping around the list
    pub fn cycle(&self, steps: i32) -> PaymentOption {
        let all = Self::all();
        let len = all.len() as i32;
        let idx = (self.index() as i32 + steps).rem_euclid(len);
        all[idx as usize]
    }
}

impl fmt::Display for PaymentOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentOption::CreditDebitCard => write!(f, "credit_debit"),
            PaymentOption::BcaVirtualAccount => write!(f, "bca_va"),
        }
    }
}

/// Amount in whole Indonesian Rupiah
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Rupiah(pub u64);

impl std::ops::Add for Rupiah {
    type Output = Rupiah;

    fn add(self, rhs: Rupiah) -> Rupiah {
        Rupiah(self.0 + rhs.0)
    }
}

impl fmt::Display for Rupiah {
    /// `Rp 10.000.000`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        write!(f, "Rp {}", grouped)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub fare: Rupiah,
    pub tax_and_service: Rupiah,
}

impl PriceBreakdown {
    pub fn total(&self) -> Rupiah {
        self.fare + self.tax_and_service
    }
}
