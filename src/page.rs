use actix_files::Files;
use actix_web::{get, web, HttpResponse, Responder};

const TITLE: &str = "AgentClinic";
const DESCRIPTION: &str = "PetClinic for AI coding agent mental health. Coding agents are doing a \
     lot of work. It's stressful! Let's build a clinic where they can get help with their issues.";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
}

pub fn static_files(dir: &str) -> Files {
    Files::new("/static", dir)
}

pub fn render_home() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <div class="page">
    <main>
      <h1>{title}</h1>
      <p>{description}</p>
    </main>
  </div>
</body>
</html>
"#,
        title = TITLE,
        description = DESCRIPTION,
    )
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_home())
}
