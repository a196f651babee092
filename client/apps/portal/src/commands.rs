//! Command Dispatch
//!
//! Manual argument parsing over a small fixed command set; a parser
//! dependency would outweigh it. Output lines go to stdout,
//! diagnostics to tracing.

use std::sync::Arc;

use directory::{api::DirectoryApi, dto::EmployeeFilter, model::Employee};
use kernel::{
    error::app_error::{AppError, AppResult, OptionExt},
    id::{ArticleId, Id, UserId},
};
use knowledge::{api::KnowledgeApi, block::BlockType, dto::NewArticle, query::ArticleQuery};
use platform::{client::PortalClient, config::ClientConfig, transport::HttpTransport};

const USAGE: &str = "\
Usage: portal <command> [args]

Commands:
  whoami                      profile of the signed-in employee
  employees [team]            directory records, optionally one team
  employee <id>               one directory record
  articles [category]         knowledge article headers
  article <id>                one article with its blocks
  article-create <json-file>  create an article from a JSON payload
  login-url                   identity-provider entry URL
";

pub async fn run(config: ClientConfig, args: &[String]) -> anyhow::Result<()> {
    let Some(command) = args.first().map(String::as_str) else {
        print!("{USAGE}");
        return Ok(());
    };

    if command == "login-url" {
        // Needs no session; just hand out the entry point
        println!("{}", config.auth_entry_url());
        return Ok(());
    }

    let login_hint = config.auth_entry_url();
    let client = Arc::new(PortalClient::connect(config).map_err(AppError::from)?);

    match dispatch(command, args, client).await {
        Ok(()) => Ok(()),
        Err(err) => {
            if err.is_unauthorized() {
                eprintln!("Session expired. Sign in at {login_hint} and retry.");
            }
            Err(err.into())
        }
    }
}

async fn dispatch(command: &str, args: &[String], client: Arc<PortalClient>) -> AppResult<()> {
    tracing::debug!(command, "Dispatching");
    let directory = DirectoryApi::new(Arc::clone(&client));
    let knowledge = KnowledgeApi::new(client);

    match command {
        "whoami" => whoami(&directory).await,
        "employees" => employees(&directory, args.get(1)).await,
        "employee" => {
            let id: UserId = parse_id(args.get(1), "employee <id>")?;
            show_employee(&directory, id).await
        }
        "articles" => articles(&knowledge, args.get(1)).await,
        "article" => {
            let id: ArticleId = parse_id(args.get(1), "article <id>")?;
            show_article(&knowledge, id).await
        }
        "article-create" => {
            let path = args
                .get(1)
                .ok_or_bad_request("article-create takes a JSON file path")?;
            create_article(&directory, &knowledge, path).await
        }
        other => Err(AppError::bad_request(format!("Unknown command `{other}`"))
            .with_action("Run `portal` without arguments for usage")),
    }
}

fn parse_id<T>(arg: Option<&String>, usage: &str) -> AppResult<Id<T>> {
    let raw = arg.ok_or_bad_request(format!("Missing id: {usage}"))?;
    Ok(raw.parse()?)
}

// ============================================================================
// Directory commands
// ============================================================================

async fn whoami(directory: &DirectoryApi<HttpTransport>) -> AppResult<()> {
    let me = directory.me().await?;
    print_employee(&me);
    Ok(())
}

async fn employees(
    directory: &DirectoryApi<HttpTransport>,
    team: Option<&String>,
) -> AppResult<()> {
    let filter = EmployeeFilter {
        team: team.cloned(),
        ..Default::default()
    };
    let found = directory.search(&filter).await?;
    if found.is_empty() {
        println!("No employees matched");
        return Ok(());
    }
    for employee in &found {
        println!(
            "{:>5}  {:<30} {:<25} {}",
            employee.id.value(),
            employee.full_name(),
            employee.post,
            employee.team
        );
    }
    Ok(())
}

async fn show_employee(directory: &DirectoryApi<HttpTransport>, id: UserId) -> AppResult<()> {
    let employee = directory.employee(id).await?;
    print_employee(&employee);
    Ok(())
}

fn print_employee(employee: &Employee) {
    println!("{} ({})", employee.full_name(), employee.id);
    println!("{}, {}", employee.post, employee.team);
    println!(
        "{} | {} | role: {} | status: {}",
        employee.email, employee.phone, employee.role, employee.status
    );
    if let Some(link) = &employee.telegram_link {
        println!("telegram: {link}");
    }
}

// ============================================================================
// Knowledge commands
// ============================================================================

async fn articles(
    knowledge: &KnowledgeApi<HttpTransport>,
    category: Option<&String>,
) -> AppResult<()> {
    let query = match category {
        Some(category) => ArticleQuery::category(category.clone()),
        None => ArticleQuery::all(),
    };
    let summaries = knowledge.list(&query).await?;
    if summaries.is_empty() {
        println!("No articles in `{}`", query.category);
        return Ok(());
    }
    for summary in &summaries {
        match &summary.description {
            Some(description) => {
                println!("{:>5}  {}: {}", summary.id.value(), summary.title, description)
            }
            None => println!("{:>5}  {}", summary.id.value(), summary.title),
        }
    }
    Ok(())
}

async fn show_article(knowledge: &KnowledgeApi<HttpTransport>, id: ArticleId) -> AppResult<()> {
    let article = knowledge.article(id).await?;
    println!("# {} [{}]", article.title, article.category);
    if let Some(description) = &article.description {
        println!("{description}");
    }
    for block in article.ordered_blocks() {
        println!();
        match block.block_type {
            BlockType::Text => println!("{}", block.content),
            other => println!("[{other}] {}", block.content),
        }
    }
    Ok(())
}

async fn create_article(
    directory: &DirectoryApi<HttpTransport>,
    knowledge: &KnowledgeApi<HttpTransport>,
    path: &str,
) -> AppResult<()> {
    let raw = std::fs::read_to_string(path)?;
    let payload: NewArticle = serde_json::from_str(&raw)?;

    // Advisory gate matching the service's own rule; the service still
    // rejects non-editors with 403
    let me = directory.me().await?;
    if !me.can_manage_articles() {
        return Err(
            AppError::forbidden("Articles are managed by admins and editors")
                .with_action("Ask a directory admin for the editor role"),
        );
    }

    let created = knowledge.create(&payload).await?;
    println!(
        "Created article {} `{}`",
        created.article.id, created.article.title
    );
    Ok(())
}
