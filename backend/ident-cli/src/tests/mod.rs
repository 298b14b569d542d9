mod runner;

use ident_auth::{HashingPolicy, IdentityService, PasswordHasher};
use ident_db::IdentityRepository;

/// Service over a fresh in-memory database with a cheap hashing policy
pub(crate) async fn test_service() -> IdentityService<IdentityRepository> {
    let pool = ident_db::connect_in_memory().await.unwrap();
    let policy = HashingPolicy::default().memory_kib(1024).iterations(1);
    IdentityService::new(IdentityRepository::new(pool), PasswordHasher::new(policy)).unwrap()
}
