//! Loader/factory contracts.
//!
//! A lookup miss is `Ok(None)`. The error channel is reserved for whatever
//! infrastructure failure the implementation can hit (storage down, lock
//! poisoned, ...); the contracts put no constraint on it.

use crate::attributes::{NewSku, NewSpu};
use crate::sku::Sku;
use crate::spu::Spu;

/// Finds and creates SPUs.
pub trait SpuLoader: Send + Sync {
    type Spu: Spu;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolve an opaque identifier to a SPU. The identifier need not be a GTIN.
    fn load_spu_by_identifier(&self, identifier: &str) -> Result<Option<Self::Spu>, Self::Error>;

    /// Always constructs a new SPU. Duplicate GTINs are not rejected here.
    fn create_spu(&self, attrs: NewSpu) -> Result<Self::Spu, Self::Error>;

    /// Return an existing SPU matching `attrs` (at least by GTIN) unchanged, or
    /// behave exactly like [`create_spu`](Self::create_spu).
    fn load_or_create_spu(&self, attrs: NewSpu) -> Result<Self::Spu, Self::Error>;
}

/// Finds and creates SKUs.
///
/// There is no find-or-create: every `create_sku` call yields a new SKU.
pub trait SkuLoader: Send + Sync {
    /// The SPU representation new SKUs are attached to.
    type Spu: Spu;
    type Sku: Sku;
    type Error: std::error::Error + Send + Sync + 'static;

    fn load_sku_by_identifier(&self, identifier: &str) -> Result<Option<Self::Sku>, Self::Error>;

    /// Always constructs a new SKU associated with `spu`.
    fn create_sku(&self, spu: &Self::Spu, attrs: NewSku) -> Result<Self::Sku, Self::Error>;
}

impl<L: SpuLoader + ?Sized> SpuLoader for std::sync::Arc<L> {
    type Spu = L::Spu;
    type Error = L::Error;

    fn load_spu_by_identifier(&self, identifier: &str) -> Result<Option<Self::Spu>, Self::Error> {
        (**self).load_spu_by_identifier(identifier)
    }

    fn create_spu(&self, attrs: NewSpu) -> Result<Self::Spu, Self::Error> {
        (**self).create_spu(attrs)
    }

    fn load_or_create_spu(&self, attrs: NewSpu) -> Result<Self::Spu, Self::Error> {
        (**self).load_or_create_spu(attrs)
    }
}

impl<L: SkuLoader + ?Sized> SkuLoader for std::sync::Arc<L> {
    type Spu = L::Spu;
    type Sku = L::Sku;
    type Error = L::Error;

    fn load_sku_by_identifier(&self, identifier: &str) -> Result<Option<Self::Sku>, Self::Error> {
        (**self).load_sku_by_identifier(identifier)
    }

    fn create_sku(&self, spu: &Self::Spu, attrs: NewSku) -> Result<Self::Sku, Self::Error> {
        (**self).create_sku(spu, attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::sync::{Arc, Mutex};

    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    struct TestSpu {
        gtin: Option<String>,
    }

    impl Spu for TestSpu {
        fn gtin(&self) -> Option<&str> {
            self.gtin.as_deref()
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct TestSku {
        id: String,
        attrs: NewSku,
    }

    impl Sku for TestSku {
        fn id(&self) -> String {
            self.id.clone()
        }

        fn gtin(&self) -> Option<&str> {
            self.attrs.gtin.as_deref()
        }

        fn mpn(&self) -> Option<&str> {
            self.attrs.mpn.as_deref()
        }

        fn remark(&self) -> Option<&str> {
            self.attrs.remark.as_deref()
        }

        fn is_valid(&self) -> Option<bool> {
            self.attrs.valid
        }
    }

    /// Vec-backed loader, enough to exercise the contract shape.
    #[derive(Default)]
    struct VecSpuLoader {
        storage: Mutex<Vec<TestSpu>>,
    }

    impl SpuLoader for VecSpuLoader {
        type Spu = TestSpu;
        type Error = Infallible;

        fn load_spu_by_identifier(&self, identifier: &str) -> Result<Option<TestSpu>, Infallible> {
            Ok((identifier == "test-spu-123").then(|| TestSpu {
                gtin: Some("1234567890123".to_string()),
            }))
        }

        fn create_spu(&self, attrs: NewSpu) -> Result<TestSpu, Infallible> {
            let spu = TestSpu { gtin: attrs.gtin };
            self.storage.lock().unwrap().push(spu.clone());
            Ok(spu)
        }

        fn load_or_create_spu(&self, attrs: NewSpu) -> Result<TestSpu, Infallible> {
            let existing = self
                .storage
                .lock()
                .unwrap()
                .iter()
                .find(|spu| spu.gtin == attrs.gtin)
                .cloned();
            match existing {
                Some(spu) => Ok(spu),
                None => self.create_spu(attrs),
            }
        }
    }

    #[derive(Default)]
    struct CountingSkuLoader {
        next: Mutex<u64>,
    }

    impl SkuLoader for CountingSkuLoader {
        type Spu = TestSpu;
        type Sku = TestSku;
        type Error = Infallible;

        fn load_sku_by_identifier(&self, _identifier: &str) -> Result<Option<TestSku>, Infallible> {
            Ok(None)
        }

        fn create_sku(&self, _spu: &TestSpu, attrs: NewSku) -> Result<TestSku, Infallible> {
            let mut next = self.next.lock().unwrap();
            *next += 1;
            Ok(TestSku {
                id: format!("sku-{}", *next),
                attrs,
            })
        }
    }

    #[test]
    fn spu_lookup_hit_and_miss() {
        let loader = VecSpuLoader::default();
        let hit = loader.load_spu_by_identifier("test-spu-123").unwrap().unwrap();
        assert_eq!(hit.gtin(), Some("1234567890123"));
        assert_eq!(loader.load_spu_by_identifier("non-existent").unwrap(), None);
    }

    #[test]
    fn load_or_create_reuses_existing_gtin() {
        let loader = VecSpuLoader::default();
        let created = loader
            .create_spu(
                NewSpu::new()
                    .with_gtin("9876543210987")
                    .with_title("Test Title")
                    .with_remark("Test Remark")
                    .with_valid(false),
            )
            .unwrap();
        assert_eq!(created.gtin(), Some("9876543210987"));

        let fresh = loader.load_or_create_spu(NewSpu::new().with_gtin("1111111111111")).unwrap();
        assert_eq!(fresh.gtin(), Some("1111111111111"));

        let existing = loader.load_or_create_spu(NewSpu::new().with_gtin("9876543210987")).unwrap();
        assert_eq!(existing.gtin(), Some("9876543210987"));
        assert_eq!(loader.storage.lock().unwrap().len(), 2);
    }

    #[test]
    fn defaults_flow_through_to_created_spu() {
        let loader = VecSpuLoader::default();
        assert_eq!(loader.create_spu(NewSpu::default()).unwrap().gtin(), None);
        assert_eq!(loader.load_or_create_spu(NewSpu::default()).unwrap().gtin(), None);
    }

    #[test]
    fn create_sku_reflects_arguments() {
        let loader = Arc::new(CountingSkuLoader::default());
        let spu = TestSpu { gtin: Some("1234567890123".to_string()) };
        let sku = loader
            .create_sku(
                &spu,
                NewSku::new()
                    .with_gtin("9876543210987")
                    .with_mpn("MPN-NEW")
                    .with_remark("New SKU")
                    .with_valid(false),
            )
            .unwrap();

        assert!(!sku.id().is_empty());
        assert_eq!(sku.gtin(), Some("9876543210987"));
        assert_eq!(sku.mpn(), Some("MPN-NEW"));
        assert_eq!(sku.remark(), Some("New SKU"));
        assert_eq!(sku.is_valid(), Some(false));
    }

    #[test]
    fn sku_loaders_are_usable_behind_dyn() {
        let loader: Arc<dyn SkuLoader<Spu = TestSpu, Sku = TestSku, Error = Infallible>> =
            Arc::new(CountingSkuLoader::default());
        assert_eq!(loader.load_sku_by_identifier("missing").unwrap(), None);
    }

    proptest! {
        #[test]
        fn created_sku_mirrors_attributes(
            gtin in proptest::option::of("[0-9]{8,14}"),
            mpn in proptest::option::of("[A-Z0-9-]{1,20}"),
            remark in proptest::option::of(".{0,40}"),
            valid in proptest::option::of(any::<bool>()),
        ) {
            let loader = CountingSkuLoader::default();
            let spu = TestSpu { gtin: None };
            let attrs = NewSku { gtin: gtin.clone(), mpn: mpn.clone(), remark: remark.clone(), valid };
            let sku = loader.create_sku(&spu, attrs).unwrap();

            prop_assert_eq!(sku.gtin(), gtin.as_deref());
            prop_assert_eq!(sku.mpn(), mpn.as_deref());
            prop_assert_eq!(sku.remark(), remark.as_deref());
            prop_assert_eq!(sku.is_valid(), valid);
        }
    }
}
