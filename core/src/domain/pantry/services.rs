use tracing::info;

use crate::domain::{
    agent::ports::AgentFacade,
    chat::ports::SessionRepository,
    common::{entities::app_errors::CoreError, services::Service},
    pantry::{
        entities::PantryItem,
        ports::{PantryRepository, PantryService},
        purchase_links::purchase_links_for,
        value_objects::{
            CreatePantryItemInput, DeletePantryItemInput, LowStockItem, UsePantryItemInput,
        },
    },
};

impl<SS, AF, PR> PantryService for Service<SS, AF, PR>
where
    SS: SessionRepository,
    AF: AgentFacade,
    PR: PantryRepository,
{
    async fn list_items(&self) -> Result<Vec<PantryItem>, CoreError> {
        self.pantry_repository.load().await
    }

    async fn add_item(&self, input: CreatePantryItemInput) -> Result<PantryItem, CoreError> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::Invalid("Item name cannot be empty.".to_string()));
        }
        if input.total_quantity == 0 {
            return Err(CoreError::Invalid(
                "total_quantity must be at least 1".to_string(),
            ));
        }

        let _guard = self.pantry_lock.lock().await;

        let mut items = self.pantry_repository.load().await?;
        let item = PantryItem::new(name, input.total_quantity, input.low_stock_threshold);
        items.push(item.clone());
        self.pantry_repository.save(items).await?;

        info!(item = %item.name, quantity = item.total_quantity, "added pantry item");
        Ok(item)
    }

    async fn use_item(&self, input: UsePantryItemInput) -> Result<PantryItem, CoreError> {
        let _guard = self.pantry_lock.lock().await;

        let mut items = self.pantry_repository.load().await?;
        let item = items
            .iter_mut()
            .find(|item| item.name == input.name)
            .ok_or(CoreError::NotFound)?;

        if !item.use_one() {
            return Ok(item.clone());
        }

        let used = item.clone();
        self.pantry_repository.save(items).await?;
        Ok(used)
    }

    async fn delete_item(&self, input: DeletePantryItemInput) -> Result<(), CoreError> {
        let _guard = self.pantry_lock.lock().await;

        let mut items = self.pantry_repository.load().await?;
        let position = items
            .iter()
            .position(|item| item.name == input.name)
            .ok_or(CoreError::NotFound)?;
        items.remove(position);
        self.pantry_repository.save(items).await?;

        info!(item = %input.name, "deleted pantry item");
        Ok(())
    }

    async fn get_low_stock_items(&self) -> Result<Vec<LowStockItem>, CoreError> {
        let items = self.pantry_repository.load().await?;

        Ok(items
            .into_iter()
            .filter(PantryItem::is_low_stock)
            .map(|item| LowStockItem {
                purchase_links: purchase_links_for(&item.name, &self.pantry_config.affiliate_tag),
                item,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        chat::entities::ChatMessage,
        common::{ChatConfig, PantryConfig},
    };
    use crate::infrastructure::{pantry::JsonPantryRepository, session::InMemorySessionRepository};

    #[derive(Clone)]
    struct SilentAgent;

    impl AgentFacade for SilentAgent {
        async fn complete(
            &self,
            _input: String,
            _history: Vec<ChatMessage>,
        ) -> Result<String, CoreError> {
            Ok(String::new())
        }
    }

    type TestService = Service<InMemorySessionRepository, SilentAgent, JsonPantryRepository>;

    fn service(dir: &tempfile::TempDir) -> TestService {
        let path = dir.path().join("pantry.json");
        Service::new(
            InMemorySessionRepository::new(),
            SilentAgent,
            JsonPantryRepository::new(path),
            ChatConfig::default(),
            PantryConfig {
                pantry_file: "pantry.json".to_string(),
                affiliate_tag: "dietai-aff-123".to_string(),
            },
        )
    }

    fn eggs() -> CreatePantryItemInput {
        CreatePantryItemInput {
            name: "Eggs".to_string(),
            total_quantity: 12,
            low_stock_threshold: 3,
        }
    }

    #[tokio::test]
    async fn test_fresh_store_is_empty_then_holds_added_item() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        assert!(service.list_items().await.unwrap().is_empty());

        service.add_item(eggs()).await.unwrap();

        let items = service.list_items().await.unwrap();
        assert_eq!(items, vec![PantryItem::new("Eggs".to_string(), 12, 3)]);
    }

    #[tokio::test]
    async fn test_add_item_rejects_blank_name_and_zero_quantity() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let blank = CreatePantryItemInput {
            name: "   ".to_string(),
            ..eggs()
        };
        assert!(matches!(service.add_item(blank).await, Err(CoreError::Invalid(_))));

        let empty = CreatePantryItemInput {
            total_quantity: 0,
            ..eggs()
        };
        assert!(matches!(service.add_item(empty).await, Err(CoreError::Invalid(_))));
        assert!(service.list_items().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_use_item_decrements_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        service.add_item(eggs()).await.unwrap();

        let used = service
            .use_item(UsePantryItemInput {
                name: "Eggs".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(used.current_quantity, 11);
        assert_eq!(service.list_items().await.unwrap()[0].current_quantity, 11);
    }

    #[tokio::test]
    async fn test_use_item_at_zero_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        service
            .add_item(CreatePantryItemInput {
                name: "Milk".to_string(),
                total_quantity: 1,
                low_stock_threshold: 0,
            })
            .await
            .unwrap();

        let input = || UsePantryItemInput {
            name: "Milk".to_string(),
        };
        assert_eq!(service.use_item(input()).await.unwrap().current_quantity, 0);
        assert_eq!(service.use_item(input()).await.unwrap().current_quantity, 0);
    }

    #[tokio::test]
    async fn test_unknown_item_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let used = service
            .use_item(UsePantryItemInput {
                name: "Saffron".to_string(),
            })
            .await;
        assert_eq!(used, Err(CoreError::NotFound));

        let deleted = service
            .delete_item(DeletePantryItemInput {
                name: "Saffron".to_string(),
            })
            .await;
        assert_eq!(deleted, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_item_removes_only_that_item() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        service.add_item(eggs()).await.unwrap();
        service
            .add_item(CreatePantryItemInput {
                name: "Rice".to_string(),
                total_quantity: 5,
                low_stock_threshold: 1,
            })
            .await
            .unwrap();

        service
            .delete_item(DeletePantryItemInput {
                name: "Eggs".to_string(),
            })
            .await
            .unwrap();

        let names: Vec<String> = service
            .list_items()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["Rice"]);
    }

    #[tokio::test]
    async fn test_low_stock_items_carry_purchase_links() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        service.add_item(eggs()).await.unwrap();
        service
            .add_item(CreatePantryItemInput {
                name: "Olive oil".to_string(),
                total_quantity: 1,
                low_stock_threshold: 1,
            })
            .await
            .unwrap();

        let low = service.get_low_stock_items().await.unwrap();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].item.name, "Olive oil");
        assert_eq!(low[0].purchase_links.len(), 3);
        assert_eq!(
            low[0].purchase_links[0].url,
            "https://blinkit.com/s/?q=Olive+oil&tag=dietai-aff-123"
        );
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_not_lost() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let adds = (0..8).map(|i| {
            let service = service.clone();
            async move {
                service
                    .add_item(CreatePantryItemInput {
                        name: format!("item-{i}"),
                        total_quantity: 1,
                        low_stock_threshold: 0,
                    })
                    .await
            }
        });
        for result in spawn_all(adds).await {
            result.unwrap();
        }

        assert_eq!(service.list_items().await.unwrap().len(), 8);
    }

    async fn spawn_all<F, T>(futures: impl Iterator<Item = F>) -> Vec<T>
    where
        F: std::future::Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let handles: Vec<_> = futures.map(tokio::spawn).collect();
        let mut results = Vec::with_capacity(handles.len());
        for handle in handles {
            results.push(handle.await.unwrap());
        }
        results
    }
}
