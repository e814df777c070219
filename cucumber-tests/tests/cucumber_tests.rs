use cucumber::World;
use cucumber_tests::features::RbacWorld;

#[tokio::main]
async fn main() {
    RbacWorld::cucumber().fail_on_skipped().run_and_exit("features/").await;
}
